//! Synth command implementation.
//!
//! The `landing-infra synth` command resolves the context, selects the
//! topology, and either prints the resulting app or hands it to the
//! manifest writer.

use crate::app::{App, ManifestWriter, Provisioner};
use crate::cli::args::SynthArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::inputs::ResolutionInputs;

/// The synth command implementation.
pub struct SynthCommand {
    inputs: ResolutionInputs,
    args: SynthArgs,
}

impl SynthCommand {
    /// Create a new synth command.
    pub fn new(inputs: ResolutionInputs, args: SynthArgs) -> Self {
        Self { inputs, args }
    }
}

impl Command for SynthCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.inputs.resolve();
        if ui.output_mode().shows_details() {
            let width = resolved.field_width();
            for (name, source) in resolved.sources() {
                let value = resolved.value(name).unwrap_or_else(|| "-".to_string());
                ui.detail(name, width, &value, &source.to_string());
            }
        }

        let ctx = resolved.into_context();
        if ctx.account.is_none() {
            ui.warning("No target account set; the provisioner will choose one");
        }

        let app = App::synthesize(&ctx)?;

        match &self.args.output {
            Some(dir) => {
                let mut writer = ManifestWriter::new(dir);
                writer.provision(&app)?;
                ui.success(&format!(
                    "{} ({} topology) written to {}",
                    app.stack.stack_id,
                    app.topology,
                    writer.manifest_path().display()
                ));
            }
            None => {
                let rendered = if self.args.json {
                    app.to_json()?
                } else {
                    app.to_yaml()?
                };
                ui.message(rendered.trim_end());
            }
        }

        Ok(CommandResult::success())
    }
}
