//! Recognised context keys, environment variables, and their defaults.

/// Context key whose presence selects the pipeline topology.
pub const CODE_CONNECTION_ARN: &str = "codeConnectionArn";
/// Context key for the `owner/name` source repository.
pub const REPOSITORY_NAME: &str = "repositoryName";
/// Context key for the source branch.
pub const BRANCH_NAME: &str = "branchName";
/// Context key for the standalone environment name.
pub const ENVIRONMENT: &str = "environment";
/// Context key for the built static artifact location.
pub const BUILD_PATH: &str = "buildPath";

/// All context keys the resolver reads.
pub const KNOWN: [&str; 5] = [
    CODE_CONNECTION_ARN,
    REPOSITORY_NAME,
    BRANCH_NAME,
    ENVIRONMENT,
    BUILD_PATH,
];

pub const ACCOUNT_ENV: &str = "CDK_DEFAULT_ACCOUNT";
pub const REGION_ENV: &str = "CDK_DEFAULT_REGION";
pub const IDENTITY_ENV: &str = "USER";
pub const IDENTITY_COMMAND: &str = "whoami";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_REPOSITORY: &str = "PawRush/Next-JS-Landing-Page-Starter-Template";
pub const DEFAULT_BRANCH: &str = "deploy-to-aws-20260128_174824-sergeyka";
pub const DEFAULT_BUILD_PATH: &str = "../out";

/// Environment name prefix for identity-derived previews.
pub const PREVIEW_PREFIX: &str = "preview";
/// Environment name used when no identity can be found.
pub const FALLBACK_ENVIRONMENT: &str = "preview-local";
/// The one environment that gets termination protection.
pub const PRODUCTION_ENVIRONMENT: &str = "prod";

/// Check whether the resolver reads this key.
pub fn is_known(key: &str) -> bool {
    KNOWN.contains(&key)
}

/// Treat empty and whitespace-only values as absent.
///
/// # Example
///
/// ```
/// use landing_infra::context::keys::non_empty;
///
/// assert_eq!(non_empty(Some("eu-west-1".to_string())), Some("eu-west-1".to_string()));
/// assert_eq!(non_empty(Some("  ".to_string())), None);
/// assert_eq!(non_empty(None), None);
/// ```
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
