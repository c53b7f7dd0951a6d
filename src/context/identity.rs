//! Local identity lookup.
//!
//! Preview environments are named after whoever runs the deployment. The
//! identity comes from an environment variable, or failing that from an
//! external command. Every failure is soft: the caller just gets `None`.

use std::env::VarError;

use crate::shell::capture_stdout;

use super::keys::{self, non_empty};

/// Where an identity value was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySource {
    /// Read from an environment variable.
    EnvVar(String),
    /// Printed by an external command.
    Command(String),
    /// Supplied directly (test fakes, embedding callers).
    Static,
}

impl std::fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "${}", var),
            Self::Command(cmd) => write!(f, "`{}`", cmd),
            Self::Static => write!(f, "static identity"),
        }
    }
}

/// A resolved identity value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The identity, trimmed and non-empty.
    pub value: String,
    /// Where it came from.
    pub source: IdentitySource,
}

/// Supplies the identity of the current operator.
pub trait IdentityProvider {
    /// Look up the identity. Returns `None` when it cannot be determined.
    fn identity(&self) -> Option<Identity>;
}

type EnvFn = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// Identity from the process environment, then from an external command.
///
/// # Example
///
/// ```
/// use landing_infra::context::{IdentityProvider, IdentitySource, SystemIdentity};
///
/// let provider = SystemIdentity::new().with_env(|key| {
///     if key == "USER" {
///         Ok("alice".to_string())
///     } else {
///         Err(std::env::VarError::NotPresent)
///     }
/// });
///
/// let identity = provider.identity().unwrap();
/// assert_eq!(identity.value, "alice");
/// assert_eq!(identity.source, IdentitySource::EnvVar("USER".to_string()));
/// ```
pub struct SystemIdentity {
    env_var: String,
    command: String,
    env_fn: EnvFn,
}

impl SystemIdentity {
    /// Create a provider reading `$USER`, then running `whoami`.
    pub fn new() -> Self {
        Self {
            env_var: keys::IDENTITY_ENV.to_string(),
            command: keys::IDENTITY_COMMAND.to_string(),
            env_fn: Box::new(|key: &str| std::env::var(key)),
        }
    }

    /// Replace the environment lookup (for testing).
    pub fn with_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError> + 'static,
    {
        self.env_fn = Box::new(env_fn);
        self
    }

    /// Replace the identity command.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    fn from_env(&self) -> Option<Identity> {
        let value = non_empty((self.env_fn)(self.env_var.as_str()).ok())?;
        Some(Identity {
            value: value.trim().to_string(),
            source: IdentitySource::EnvVar(self.env_var.clone()),
        })
    }

    fn from_command(&self) -> Option<Identity> {
        match capture_stdout(&self.command, &[]) {
            Ok(Some(value)) => Some(Identity {
                value,
                source: IdentitySource::Command(self.command.clone()),
            }),
            Ok(None) => {
                tracing::debug!("Identity command `{}` printed nothing", self.command);
                None
            }
            Err(e) => {
                tracing::debug!("Identity lookup failed: {}", e);
                None
            }
        }
    }
}

impl Default for SystemIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SystemIdentity {
    fn identity(&self) -> Option<Identity> {
        self.from_env().or_else(|| self.from_command())
    }
}

/// Fixed identity, for tests and callers that already know the operator.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    value: Option<String>,
}

impl StaticIdentity {
    /// An identity that always resolves to `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// An identity that never resolves.
    pub fn none() -> Self {
        Self { value: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn identity(&self) -> Option<Identity> {
        non_empty(self.value.clone()).map(|value| Identity {
            value: value.trim().to_string(),
            source: IdentitySource::Static,
        })
    }
}
