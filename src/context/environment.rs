//! Environment name resolution.
//!
//! Resolves the deployment environment name using the priority chain:
//! 1. Explicit `environment` context value
//! 2. `preview-<identity>` from the operator identity
//! 3. Fallback to `preview-local`

use super::identity::{IdentityProvider, IdentitySource};
use super::keys::{FALLBACK_ENVIRONMENT, PREVIEW_PREFIX};

/// How the environment name was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentSource {
    /// Supplied explicitly through context.
    Explicit,
    /// Derived from the operator identity.
    Identity(IdentitySource),
    /// No identity could be found.
    Fallback,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "context"),
            Self::Identity(source) => write!(f, "identity via {}", source),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved environment with its name and how it was determined.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEnvironment {
    /// The environment name (e.g., "prod", "preview-alice").
    pub name: String,
    /// How this environment was determined.
    pub source: EnvironmentSource,
}

impl ResolvedEnvironment {
    /// Resolve the environment name.
    ///
    /// The identity provider is only consulted when no explicit name is
    /// given. An explicit name is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use landing_infra::context::{EnvironmentSource, ResolvedEnvironment, StaticIdentity};
    ///
    /// let resolved = ResolvedEnvironment::resolve(None, &StaticIdentity::new("alice"));
    /// assert_eq!(resolved.name, "preview-alice");
    ///
    /// let resolved = ResolvedEnvironment::resolve(None, &StaticIdentity::none());
    /// assert_eq!(resolved.name, "preview-local");
    /// assert_eq!(resolved.source, EnvironmentSource::Fallback);
    ///
    /// let resolved = ResolvedEnvironment::resolve(Some("staging"), &StaticIdentity::new("alice"));
    /// assert_eq!(resolved.name, "staging");
    /// ```
    pub fn resolve(explicit: Option<&str>, identity: &dyn IdentityProvider) -> Self {
        // 1. Explicit context value
        if let Some(name) = explicit {
            return Self {
                name: name.to_string(),
                source: EnvironmentSource::Explicit,
            };
        }

        // 2. Operator identity
        if let Some(identity) = identity.identity() {
            return Self {
                name: preview_name(&identity.value),
                source: EnvironmentSource::Identity(identity.source),
            };
        }

        // 3. Fallback
        tracing::debug!(
            "No operator identity found, using '{}'",
            FALLBACK_ENVIRONMENT
        );
        Self {
            name: FALLBACK_ENVIRONMENT.to_string(),
            source: EnvironmentSource::Fallback,
        }
    }
}

/// Format the preview environment name for an identity.
pub fn preview_name(identity: &str) -> String {
    format!("{}-{}", PREVIEW_PREFIX, identity)
}
