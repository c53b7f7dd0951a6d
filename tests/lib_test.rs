//! Library integration tests.

use landing_infra::InfraError;

#[test]
fn error_types_are_public() {
    let err = InfraError::InvalidContext {
        key: "environment".into(),
        message: "must not be empty".into(),
    };
    assert!(err.to_string().contains("environment"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> landing_infra::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use landing_infra::cli::{Cli, Commands};

    let cli = Cli::parse_from(["landing-infra", "context", "--json"]);

    if let Some(Commands::Context(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Context command");
    }
}
