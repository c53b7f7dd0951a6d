//! Stack configuration building.
//!
//! Maps a [`DeploymentContext`] and the selected [`Topology`] onto the
//! parameter object handed to the provisioner.

use serde::Serialize;

use crate::context::keys::PRODUCTION_ENVIRONMENT;
use crate::context::DeploymentContext;
use crate::error::Result;
use crate::topology::Topology;

use super::naming::{
    frontend_description, frontend_stack_name, pipeline_description, validate_stack_name,
    PIPELINE_STACK_NAME,
};

/// Target account and region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackEnv {
    /// `None` leaves the account to the provisioner.
    pub account: Option<String>,
    pub region: String,
}

/// Properties of a standalone hosting stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendProps {
    pub environment: String,
    pub build_output_path: String,
}

/// Properties of a pipeline stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineProps {
    pub code_connection_arn: String,
    pub repository_name: String,
    pub branch_name: String,
}

/// Topology-specific stack properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StackProps {
    Frontend(FrontendProps),
    Pipeline(PipelineProps),
}

/// Everything the provisioner needs to materialise one stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackConfig {
    pub stack_id: String,
    pub description: String,
    pub env: StackEnv,
    pub termination_protection: bool,
    pub props: StackProps,
}

/// Termination protection for a topology.
///
/// Pipelines are always protected; standalone stacks only in production.
pub fn termination_protection(topology: &Topology) -> bool {
    match topology {
        Topology::Pipeline(_) => true,
        Topology::Standalone(params) => params.environment == PRODUCTION_ENVIRONMENT,
    }
}

/// Builds a [`StackConfig`] from a resolved context.
///
/// # Example
///
/// ```
/// use landing_infra::context::{ContextLayer, ContextLayerStack, ContextResolver, StaticIdentity};
/// use landing_infra::stack::StackConfigBuilder;
/// use landing_infra::topology::Topology;
///
/// let mut cli = ContextLayer::new("--context");
/// cli.set("environment", "prod");
/// let mut layers = ContextLayerStack::new();
/// layers.push(cli);
///
/// let identity = StaticIdentity::none();
/// let ctx = ContextResolver::new(&layers, &identity)
///     .resolve_with_env(|_| Err(std::env::VarError::NotPresent))
///     .into_context();
///
/// let topology = Topology::select(&ctx).unwrap();
/// let stack = StackConfigBuilder::new(&ctx).build(&topology).unwrap();
/// assert_eq!(stack.stack_id, "NextLandingFrontend-prod");
/// assert!(stack.termination_protection);
/// ```
pub struct StackConfigBuilder<'a> {
    ctx: &'a DeploymentContext,
}

impl<'a> StackConfigBuilder<'a> {
    pub fn new(ctx: &'a DeploymentContext) -> Self {
        Self { ctx }
    }

    /// Build the configuration for the selected topology.
    ///
    /// # Errors
    ///
    /// Returns [`crate::InfraError::InvalidStackName`] when the derived
    /// stack id is not a valid stack name.
    pub fn build(&self, topology: &Topology) -> Result<StackConfig> {
        let (stack_id, description, props) = match topology {
            Topology::Standalone(params) => (
                frontend_stack_name(&params.environment),
                frontend_description(&params.environment),
                StackProps::Frontend(FrontendProps {
                    environment: params.environment.clone(),
                    build_output_path: params.build_output_path.clone(),
                }),
            ),
            Topology::Pipeline(params) => (
                PIPELINE_STACK_NAME.to_string(),
                pipeline_description(),
                StackProps::Pipeline(PipelineProps {
                    code_connection_arn: params.code_connection_arn.clone(),
                    repository_name: params.repository_name.clone(),
                    branch_name: params.branch_name.clone(),
                }),
            ),
        };

        validate_stack_name(&stack_id)?;

        Ok(StackConfig {
            stack_id,
            description,
            env: StackEnv {
                account: self.ctx.account.clone(),
                region: self.ctx.region.clone(),
            },
            termination_protection: termination_protection(topology),
            props,
        })
    }
}
