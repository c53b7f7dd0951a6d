//! Context command implementation.
//!
//! The `landing-infra context` command shows every resolved input and the
//! place it came from.

use crate::cli::args::ContextArgs;
use crate::context::ResolvedContext;
use crate::error::{InfraError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::inputs::ResolutionInputs;

/// The context command implementation.
pub struct ContextCommand {
    inputs: ResolutionInputs,
    args: ContextArgs,
}

impl ContextCommand {
    /// Create a new context command.
    pub fn new(inputs: ResolutionInputs, args: ContextArgs) -> Self {
        Self { inputs, args }
    }
}

impl Command for ContextCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.inputs.resolve();

        if self.args.json {
            let json = serde_json::to_string_pretty(&to_json(&resolved))
                .map_err(|e| InfraError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let width = resolved.field_width();
        for (name, source) in resolved.sources() {
            let value = resolved.value(name).unwrap_or_else(|| "-".to_string());
            ui.field(name, width, &value, &source.to_string());
        }

        Ok(CommandResult::success())
    }
}

fn to_json(resolved: &ResolvedContext) -> serde_json::Value {
    let sources: serde_json::Map<String, serde_json::Value> = resolved
        .sources()
        .iter()
        .map(|(name, source)| (name.to_string(), source.to_string().into()))
        .collect();

    serde_json::json!({
        "context": resolved.context,
        "sources": sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::inputs::test_support::inputs;
    use crate::ui::MockUI;

    #[test]
    fn reports_every_field_with_source() {
        let cmd = ContextCommand::new(
            inputs(&[("environment", "staging")]),
            ContextArgs::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.fields().len(), 7);
        assert_eq!(ui.field("account"), Some(("-", "unset")));
        assert_eq!(ui.field("region"), Some(("us-east-1", "default")));
        assert_eq!(ui.field("environment"), Some(("staging", "--context")));
        assert_eq!(ui.field("buildPath"), Some(("../out", "default")));
    }

    #[test]
    fn reports_identity_source() {
        let cmd = ContextCommand::new(inputs(&[]), ContextArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(
            ui.field("environment"),
            Some(("preview-alice", "identity via static identity"))
        );
    }

    #[test]
    fn json_output() {
        let cmd = ContextCommand::new(
            inputs(&[("codeConnectionArn", "arn:x")]),
            ContextArgs { json: true },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["context"]["codeConnectionArn"], "arn:x");
        assert_eq!(value["context"]["buildOutputPath"], "../out");
        assert_eq!(value["sources"]["codeConnectionArn"], "--context");
        assert_eq!(value["sources"]["region"], "default");
    }
}
