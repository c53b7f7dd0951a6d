//! Topology selection.
//!
//! A run deploys exactly one of two shapes. A code connection means a
//! managed pipeline that provisions hosting itself; no connection means a
//! standalone hosting stack. The choice is made once, from the resolved
//! [`DeploymentContext`], and the parameters each shape needs are checked
//! here so nothing downstream sees a half-valid configuration.

use serde::Serialize;

use crate::context::keys;
use crate::context::DeploymentContext;
use crate::error::{InfraError, Result};

/// Which deployment shape was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    Standalone,
    Pipeline,
}

impl std::fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Pipeline => write!(f, "pipeline"),
        }
    }
}

/// Validated inputs for a standalone hosting stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneParams {
    pub environment: String,
    pub build_output_path: String,
}

/// Validated inputs for a pipeline stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineParams {
    pub code_connection_arn: String,
    pub repository_name: String,
    pub branch_name: String,
}

/// The selected topology and its validated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    Standalone(StandaloneParams),
    Pipeline(PipelineParams),
}

impl Topology {
    /// Select the topology for a resolved context.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::InvalidContext`] when a value the selected
    /// topology needs is blank, or when the repository is not an `owner/name` path.
    ///
    /// # Example
    ///
    /// ```
    /// use landing_infra::context::{ContextLayerStack, ContextResolver, StaticIdentity};
    /// use landing_infra::topology::{Topology, TopologyKind};
    ///
    /// let layers = ContextLayerStack::new();
    /// let identity = StaticIdentity::new("alice");
    /// let ctx = ContextResolver::new(&layers, &identity)
    ///     .resolve_with_env(|_| Err(std::env::VarError::NotPresent))
    ///     .into_context();
    ///
    /// let topology = Topology::select(&ctx).unwrap();
    /// assert_eq!(topology.kind(), TopologyKind::Standalone);
    /// ```
    pub fn select(ctx: &DeploymentContext) -> Result<Self> {
        let topology = match &ctx.code_connection_arn {
            Some(arn) if !arn.trim().is_empty() => Self::Pipeline(PipelineParams {
                code_connection_arn: arn.clone(),
                repository_name: require(keys::REPOSITORY_NAME, &ctx.repository_name)?,
                branch_name: require(keys::BRANCH_NAME, &ctx.branch_name)?,
            }),
            _ => Self::Standalone(StandaloneParams {
                environment: require(keys::ENVIRONMENT, &ctx.environment)?,
                build_output_path: require(keys::BUILD_PATH, &ctx.build_output_path)?,
            }),
        };

        if let Self::Pipeline(params) = &topology {
            check_repository(&params.repository_name)?;
        }

        tracing::info!("Selected {} topology", topology.kind());
        Ok(topology)
    }

    /// The kind of this topology.
    pub fn kind(&self) -> TopologyKind {
        match self {
            Self::Standalone(_) => TopologyKind::Standalone,
            Self::Pipeline(_) => TopologyKind::Pipeline,
        }
    }

    /// Environment name, for standalone topologies only.
    pub fn environment(&self) -> Option<&str> {
        match self {
            Self::Standalone(params) => Some(&params.environment),
            Self::Pipeline(_) => None,
        }
    }
}

fn require(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(InfraError::InvalidContext {
            key: key.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(value.to_string())
}

fn check_repository(repository: &str) -> Result<()> {
    let valid = repository.contains('/')
        && !repository.starts_with('/')
        && !repository.ends_with('/');

    if valid {
        Ok(())
    } else {
        Err(InfraError::InvalidContext {
            key: keys::REPOSITORY_NAME.to_string(),
            message: format!("expected an 'owner/name' path, got '{}'", repository),
        })
    }
}
