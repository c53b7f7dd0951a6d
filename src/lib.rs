//! landing-infra - Deployment topology resolution for a static front end.
//!
//! Each invocation deploys exactly one of two shapes: a standalone preview
//! hosting stack, or a managed delivery pipeline that provisions hosting
//! itself. This crate resolves every optional input to a concrete value,
//! makes that choice, and produces the configuration handed to the
//! provisioner.
//!
//! # Modules
//!
//! - [`app`] - Composition root and provisioning hand-off
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Layered context, identity lookup, and context resolution
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution
//! - [`stack`] - Stack configuration building and naming
//! - [`tags`] - Root tag application
//! - [`topology`] - Standalone/pipeline selection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use landing_infra::app::App;
//! use landing_infra::context::{ContextLayerStack, ContextResolver, StaticIdentity};
//!
//! let layers = ContextLayerStack::new();
//! let identity = StaticIdentity::new("alice");
//! let ctx = ContextResolver::new(&layers, &identity)
//!     .resolve_with_env(|_| Err(std::env::VarError::NotPresent))
//!     .into_context();
//!
//! let app = App::synthesize(&ctx).unwrap();
//! assert_eq!(app.stack.stack_id, "NextLandingFrontend-preview-alice");
//! assert!(!app.stack.termination_protection);
//! ```

pub mod app;
pub mod cli;
pub mod context;
pub mod error;
pub mod shell;
pub mod stack;
pub mod tags;
pub mod topology;
pub mod ui;

pub use error::{InfraError, Result};
