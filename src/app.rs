//! Composition root and provisioning hand-off.
//!
//! [`App::synthesize`] runs selection, stack building and tagging exactly
//! once. The result holds a single stack, so a run can never produce both
//! topologies or neither. What happens to the app afterwards belongs to a
//! [`Provisioner`].

use std::path::PathBuf;

use serde::Serialize;

use crate::context::DeploymentContext;
use crate::error::{InfraError, Result};
use crate::stack::{StackConfig, StackConfigBuilder};
use crate::tags::{apply_tags, TagSet};
use crate::topology::{Topology, TopologyKind};

/// File name written by [`ManifestWriter`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// The resolved composition root: one stack plus root tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct App {
    pub topology: TopologyKind,
    pub stack: StackConfig,
    pub tags: TagSet,
}

impl App {
    /// Select the topology, build its stack, and tag the root.
    ///
    /// # Example
    ///
    /// ```
    /// use landing_infra::app::App;
    /// use landing_infra::context::{ContextLayer, ContextLayerStack, ContextResolver, StaticIdentity};
    /// use landing_infra::topology::TopologyKind;
    ///
    /// let mut cli = ContextLayer::new("--context");
    /// cli.set("codeConnectionArn", "arn:aws:codeconnections:us-east-1:1:connection/x");
    /// let mut layers = ContextLayerStack::new();
    /// layers.push(cli);
    ///
    /// let identity = StaticIdentity::new("alice");
    /// let ctx = ContextResolver::new(&layers, &identity)
    ///     .resolve_with_env(|_| Err(std::env::VarError::NotPresent))
    ///     .into_context();
    ///
    /// let app = App::synthesize(&ctx).unwrap();
    /// assert_eq!(app.topology, TopologyKind::Pipeline);
    /// assert_eq!(app.stack.stack_id, "NextLandingPipelineStack");
    /// assert!(!app.tags.contains_key("Environment"));
    /// ```
    pub fn synthesize(ctx: &DeploymentContext) -> Result<Self> {
        let topology = Topology::select(ctx)?;
        let stack = StackConfigBuilder::new(ctx).build(&topology)?;
        let tags = apply_tags(&TagSet::new(), &topology);

        tracing::info!(
            "Synthesized {} (termination protection: {})",
            stack.stack_id,
            stack.termination_protection
        );

        Ok(Self {
            topology: topology.kind(),
            stack,
            tags,
        })
    }

    /// Render as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| InfraError::Other(e.into()))
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| InfraError::Other(e.into()))
    }
}

/// Materialises a synthesized [`App`].
pub trait Provisioner {
    fn provision(&mut self, app: &App) -> Result<()>;
}

/// Writes the app as `manifest.json` into an output directory.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    out_dir: PathBuf,
}

impl ManifestWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Path of the manifest this writer produces.
    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE)
    }
}

impl Provisioner for ManifestWriter {
    fn provision(&mut self, app: &App) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.manifest_path();
        std::fs::write(&path, app.to_json()?)?;
        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}
