//! Deployment context resolution.
//!
//! Turns the layered context values and the process environment into a
//! fully populated [`DeploymentContext`]. Every field has its own default
//! rule; nothing here fails.

use std::env::VarError;

use serde::Serialize;

use super::environment::{EnvironmentSource, ResolvedEnvironment};
use super::identity::{IdentityProvider, IdentitySource};
use super::keys::{self, non_empty};
use super::layer::ContextLayerStack;

/// Resolved deployment inputs. Built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentContext {
    /// Target account; left unset for the provisioner to default.
    pub account: Option<String>,
    /// Target region.
    pub region: String,
    /// Managed source connection. Presence selects the pipeline topology.
    pub code_connection_arn: Option<String>,
    /// Source repository as `owner/name`.
    pub repository_name: String,
    /// Source branch.
    pub branch_name: String,
    /// Standalone environment name.
    pub environment: String,
    /// Location of the built static artifact.
    pub build_output_path: String,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    /// A context layer (named by its source).
    Context(String),
    /// A process environment variable.
    EnvVar(String),
    /// The operator identity.
    Identity(IdentitySource),
    /// The built-in default.
    Default,
    /// Nothing supplied and no default applies.
    Unset,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context(source) => write!(f, "{}", source),
            Self::EnvVar(var) => write!(f, "${}", var),
            Self::Identity(source) => write!(f, "identity via {}", source),
            Self::Default => write!(f, "default"),
            Self::Unset => write!(f, "unset"),
        }
    }
}

/// A deployment context together with the source of each field.
#[derive(Debug, Clone)]
pub struct ResolvedContext {
    /// The resolved context.
    pub context: DeploymentContext,
    sources: Vec<(&'static str, ValueSource)>,
}

impl ResolvedContext {
    /// Source of a field, by its context key (`account` and `region` for
    /// the environment-derived fields).
    pub fn source(&self, field: &str) -> Option<&ValueSource> {
        self.sources
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, source)| source)
    }

    /// All field sources in resolution order.
    pub fn sources(&self) -> &[(&'static str, ValueSource)] {
        &self.sources
    }

    /// Display value of a field, by the same names as [`Self::source`].
    /// `None` for an unset account or connection, or an unknown field.
    pub fn value(&self, field: &str) -> Option<String> {
        let ctx = &self.context;
        match field {
            ACCOUNT_FIELD => ctx.account.clone(),
            REGION_FIELD => Some(ctx.region.clone()),
            keys::CODE_CONNECTION_ARN => ctx.code_connection_arn.clone(),
            keys::REPOSITORY_NAME => Some(ctx.repository_name.clone()),
            keys::BRANCH_NAME => Some(ctx.branch_name.clone()),
            keys::ENVIRONMENT => Some(ctx.environment.clone()),
            keys::BUILD_PATH => Some(ctx.build_output_path.clone()),
            _ => None,
        }
    }

    /// Width of the longest field name, for aligned reports.
    pub fn field_width(&self) -> usize {
        self.sources
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
    }

    /// Drop the source information.
    pub fn into_context(self) -> DeploymentContext {
        self.context
    }
}

/// Field label for the account in [`ResolvedContext::source`].
pub const ACCOUNT_FIELD: &str = "account";
/// Field label for the region in [`ResolvedContext::source`].
pub const REGION_FIELD: &str = "region";

/// Resolves a [`DeploymentContext`] from context layers, the process
/// environment, and an identity provider.
///
/// # Example
///
/// ```
/// use landing_infra::context::{ContextLayerStack, ContextResolver, StaticIdentity};
///
/// let layers = ContextLayerStack::new();
/// let identity = StaticIdentity::new("alice");
/// let resolved = ContextResolver::new(&layers, &identity)
///     .resolve_with_env(|_| Err(std::env::VarError::NotPresent));
///
/// let ctx = resolved.context;
/// assert_eq!(ctx.region, "us-east-1");
/// assert_eq!(ctx.environment, "preview-alice");
/// assert_eq!(ctx.build_output_path, "../out");
/// assert!(ctx.code_connection_arn.is_none());
/// ```
pub struct ContextResolver<'a> {
    layers: &'a ContextLayerStack,
    identity: &'a dyn IdentityProvider,
}

impl<'a> ContextResolver<'a> {
    /// Create a resolver over the given layers and identity provider.
    pub fn new(layers: &'a ContextLayerStack, identity: &'a dyn IdentityProvider) -> Self {
        Self { layers, identity }
    }

    /// Resolve using the process environment.
    pub fn resolve(&self) -> ResolvedContext {
        self.resolve_with_env(|key| std::env::var(key))
    }

    /// Resolve with a custom environment lookup (for testing).
    pub fn resolve_with_env<F>(&self, env_fn: F) -> ResolvedContext
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let (account, account_source) = self.account(&env_fn);
        let (region, region_source) = self.region(&env_fn);
        let (code_connection_arn, arn_source) = self.code_connection_arn();
        let (repository_name, repository_source) =
            self.with_default(keys::REPOSITORY_NAME, keys::DEFAULT_REPOSITORY);
        let (branch_name, branch_source) =
            self.with_default(keys::BRANCH_NAME, keys::DEFAULT_BRANCH);
        let (environment, environment_source) = self.environment();
        let (build_output_path, build_source) =
            self.with_default(keys::BUILD_PATH, keys::DEFAULT_BUILD_PATH);

        let sources = vec![
            (ACCOUNT_FIELD, account_source),
            (REGION_FIELD, region_source),
            (keys::CODE_CONNECTION_ARN, arn_source),
            (keys::REPOSITORY_NAME, repository_source),
            (keys::BRANCH_NAME, branch_source),
            (keys::ENVIRONMENT, environment_source),
            (keys::BUILD_PATH, build_source),
        ];

        for (field, source) in &sources {
            tracing::debug!("Resolved {} from {}", field, source);
        }

        ResolvedContext {
            context: DeploymentContext {
                account,
                region,
                code_connection_arn,
                repository_name,
                branch_name,
                environment,
                build_output_path,
            },
            sources,
        }
    }

    fn account<F>(&self, env_fn: &F) -> (Option<String>, ValueSource)
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match non_empty(env_fn(keys::ACCOUNT_ENV).ok()) {
            Some(account) => (
                Some(account),
                ValueSource::EnvVar(keys::ACCOUNT_ENV.to_string()),
            ),
            None => {
                tracing::debug!(
                    "{} is not set; the target account is left to the provisioner",
                    keys::ACCOUNT_ENV
                );
                (None, ValueSource::Unset)
            }
        }
    }

    fn region<F>(&self, env_fn: &F) -> (String, ValueSource)
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match non_empty(env_fn(keys::REGION_ENV).ok()) {
            Some(region) => (region, ValueSource::EnvVar(keys::REGION_ENV.to_string())),
            None => (keys::DEFAULT_REGION.to_string(), ValueSource::Default),
        }
    }

    fn code_connection_arn(&self) -> (Option<String>, ValueSource) {
        match self.layers.lookup(keys::CODE_CONNECTION_ARN) {
            Some((value, source)) if !value.trim().is_empty() => (
                Some(value.to_string()),
                ValueSource::Context(source.to_string()),
            ),
            Some((_, source)) => {
                tracing::debug!(
                    "Empty {} from {} treated as absent",
                    keys::CODE_CONNECTION_ARN,
                    source
                );
                (None, ValueSource::Unset)
            }
            None => (None, ValueSource::Unset),
        }
    }

    /// Explicit values win even when empty; validation rejects those later.
    fn with_default(&self, key: &str, default: &str) -> (String, ValueSource) {
        match self.layers.lookup(key) {
            Some((value, source)) => (value.to_string(), ValueSource::Context(source.to_string())),
            None => (default.to_string(), ValueSource::Default),
        }
    }

    fn environment(&self) -> (String, ValueSource) {
        let explicit = self.layers.lookup(keys::ENVIRONMENT);
        let resolved = ResolvedEnvironment::resolve(explicit.map(|(v, _)| v), self.identity);

        let source = match (resolved.source, explicit) {
            (EnvironmentSource::Explicit, Some((_, layer))) => {
                ValueSource::Context(layer.to_string())
            }
            (EnvironmentSource::Identity(source), _) => ValueSource::Identity(source),
            _ => ValueSource::Default,
        };

        (resolved.name, source)
    }
}
