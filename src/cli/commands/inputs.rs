//! Resolution inputs shared by the commands.

use std::env::VarError;

use crate::context::{
    ContextLayerStack, ContextResolver, IdentityProvider, ResolvedContext, SystemIdentity,
};

type EnvFn = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// Context layers plus the environment and identity sources a command
/// resolves against.
pub struct ResolutionInputs {
    layers: ContextLayerStack,
    identity: Box<dyn IdentityProvider>,
    env_fn: EnvFn,
}

impl ResolutionInputs {
    /// Inputs reading the process environment and the system identity.
    pub fn new(layers: ContextLayerStack) -> Self {
        Self {
            layers,
            identity: Box::new(SystemIdentity::new()),
            env_fn: Box::new(|key: &str| std::env::var(key)),
        }
    }

    /// Replace the identity provider.
    pub fn with_identity(mut self, identity: impl IdentityProvider + 'static) -> Self {
        self.identity = Box::new(identity);
        self
    }

    /// Replace the environment lookup (for testing).
    pub fn with_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError> + 'static,
    {
        self.env_fn = Box::new(env_fn);
        self
    }

    /// Resolve the deployment context.
    pub fn resolve(&self) -> ResolvedContext {
        ContextResolver::new(&self.layers, self.identity.as_ref())
            .resolve_with_env(|key| (self.env_fn)(key))
    }
}
