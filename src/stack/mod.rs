//! Stack configuration for the selected topology.
//!
//! - [`config`] - [`StackConfig`] and its builder
//! - [`naming`] - Stack ids, descriptions, and name validation

pub mod config;
pub mod naming;

pub use config::{
    termination_protection, FrontendProps, PipelineProps, StackConfig, StackConfigBuilder,
    StackEnv, StackProps,
};
pub use naming::{
    frontend_stack_name, validate_stack_name, FRONTEND_STACK_PREFIX, PIPELINE_STACK_NAME,
    PROJECT_NAME,
};
