//! Invocation context resolution.
//!
//! Every deployment input is optional. Values come from an ordered stack
//! of layers (`cdk.json`, then `cdk.context.json`, then `--context`
//! pairs), from the process environment, and from the operator identity,
//! and each field falls back to its own default.
//!
//! - [`layer`] - Layered context values with source tracking
//! - [`file`] - Context file and `KEY=VALUE` parsing
//! - [`identity`] - Operator identity lookup
//! - [`environment`] - Environment name resolution
//! - [`resolver`] - Full [`DeploymentContext`] resolution

pub mod environment;
pub mod file;
pub mod identity;
pub mod keys;
pub mod layer;
pub mod resolver;

pub use environment::{preview_name, EnvironmentSource, ResolvedEnvironment};
pub use file::{cli_layer, load_context_file, load_project_layers, parse_context_pair};
pub use identity::{Identity, IdentityProvider, IdentitySource, StaticIdentity, SystemIdentity};
pub use layer::{ContextLayer, ContextLayerStack};
pub use resolver::{ContextResolver, DeploymentContext, ResolvedContext, ValueSource};
