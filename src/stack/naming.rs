//! Stack identifiers and descriptions.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{InfraError, Result};

/// Project name used in tags and descriptions.
pub const PROJECT_NAME: &str = "NextLanding";
/// Prefix of every standalone hosting stack.
pub const FRONTEND_STACK_PREFIX: &str = "NextLandingFrontend";
/// The single pipeline stack.
pub const PIPELINE_STACK_NAME: &str = "NextLandingPipelineStack";

const MAX_STACK_NAME_LEN: usize = 128;

static STACK_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("stack name pattern is valid")
});

/// Stack id for a standalone environment.
///
/// ```
/// use landing_infra::stack::frontend_stack_name;
///
/// assert_eq!(frontend_stack_name("prod"), "NextLandingFrontend-prod");
/// ```
pub fn frontend_stack_name(environment: &str) -> String {
    format!("{}-{}", FRONTEND_STACK_PREFIX, environment)
}

pub fn frontend_description(environment: &str) -> String {
    format!("Static website hosting - {}", environment)
}

pub fn pipeline_description() -> String {
    format!("CI/CD Pipeline for {}", PROJECT_NAME)
}

/// Check a stack name against the stack naming rules: a leading letter,
/// then letters, digits and hyphens, at most 128 characters.
pub fn validate_stack_name(name: &str) -> Result<()> {
    if name.len() > MAX_STACK_NAME_LEN {
        return Err(InfraError::InvalidStackName {
            name: name.to_string(),
            message: format!("longer than {} characters", MAX_STACK_NAME_LEN),
        });
    }

    if !STACK_NAME.is_match(name) {
        return Err(InfraError::InvalidStackName {
            name: name.to_string(),
            message: "must start with a letter and contain only letters, digits and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_names() {
        assert_eq!(
            frontend_stack_name("preview-alice"),
            "NextLandingFrontend-preview-alice"
        );
        assert_eq!(
            frontend_description("staging"),
            "Static website hosting - staging"
        );
    }

    #[test]
    fn pipeline_description_names_project() {
        assert_eq!(pipeline_description(), "CI/CD Pipeline for NextLanding");
    }

    #[test]
    fn accepts_valid_names() {
        assert!(validate_stack_name(PIPELINE_STACK_NAME).is_ok());
        assert!(validate_stack_name("NextLandingFrontend-preview-local").is_ok());
        assert!(validate_stack_name("NextLandingFrontend-pr-42").is_ok());
    }

    #[test]
    fn rejects_invalid_characters() {
        for bad in [
            "NextLandingFrontend-john.doe",
            "NextLandingFrontend-a b",
            "NextLandingFrontend-DOMAIN\\user",
            "1stack",
            "",
        ] {
            assert!(
                matches!(
                    validate_stack_name(bad),
                    Err(InfraError::InvalidStackName { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn rejects_long_names() {
        let name = format!("A{}", "b".repeat(MAX_STACK_NAME_LEN));
        assert!(validate_stack_name(&name).is_err());

        let name = format!("A{}", "b".repeat(MAX_STACK_NAME_LEN - 1));
        assert!(validate_stack_name(&name).is_ok());
    }
}
