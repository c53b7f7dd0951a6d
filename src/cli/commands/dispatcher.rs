//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, SynthArgs};
use crate::context::{cli_layer, load_project_layers, ContextLayerStack};
use crate::error::Result;
use crate::ui::UserInterface;

use super::inputs::ResolutionInputs;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build the context layers: project files, then `--context` pairs.
    pub fn layers(&self, cli: &Cli) -> Result<ContextLayerStack> {
        let mut layers = load_project_layers(&self.project_root)?;
        if !cli.context.is_empty() {
            layers.push(cli_layer(&cli.context));
        }
        Ok(layers)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Synth(args)) => {
                let inputs = ResolutionInputs::new(self.layers(cli)?);
                super::synth::SynthCommand::new(inputs, args.clone()).execute(ui)
            }
            Some(Commands::Context(args)) => {
                let inputs = ResolutionInputs::new(self.layers(cli)?);
                super::context::ContextCommand::new(inputs, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                // Default to synth with default args
                let inputs = ResolutionInputs::new(self.layers(cli)?);
                super::synth::SynthCommand::new(inputs, SynthArgs::default()).execute(ui)
            }
        }
    }
}
