//! Tags applied to the composition root.
//!
//! Tagging is a pure merge: [`apply_tags`] takes a tag set and returns a
//! new one, so applying it again with the same topology changes nothing.

use std::collections::BTreeMap;

use crate::stack::PROJECT_NAME;
use crate::topology::Topology;

pub const ENVIRONMENT_TAG: &str = "Environment";
pub const PROJECT_TAG: &str = "Project";
pub const MANAGED_BY_TAG: &str = "ManagedBy";
pub const MANAGED_BY: &str = "CDK";

/// Ordered tag mapping.
pub type TagSet = BTreeMap<String, String>;

/// Merge the deployment tags into `base`.
///
/// `Environment` is added for standalone topologies only; `Project` and
/// `ManagedBy` are always added.
///
/// # Example
///
/// ```
/// use landing_infra::tags::{apply_tags, TagSet};
/// use landing_infra::topology::{StandaloneParams, Topology};
///
/// let topology = Topology::Standalone(StandaloneParams {
///     environment: "staging".to_string(),
///     build_output_path: "../out".to_string(),
/// });
///
/// let tags = apply_tags(&TagSet::new(), &topology);
/// assert_eq!(tags["Environment"], "staging");
/// assert_eq!(tags["Project"], "NextLanding");
/// assert_eq!(tags["ManagedBy"], "CDK");
/// assert_eq!(apply_tags(&tags, &topology), tags);
/// ```
pub fn apply_tags(base: &TagSet, topology: &Topology) -> TagSet {
    let mut tags = base.clone();

    if let Some(environment) = topology.environment() {
        tags.insert(ENVIRONMENT_TAG.to_string(), environment.to_string());
    }

    tags.insert(PROJECT_TAG.to_string(), PROJECT_NAME.to_string());
    tags.insert(MANAGED_BY_TAG.to_string(), MANAGED_BY.to_string());
    tags
}
