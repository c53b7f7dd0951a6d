//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::context::parse_context_pair;

/// landing-infra - Resolve which deployment topology to synthesize.
#[derive(Debug, Parser)]
#[command(name = "landing-infra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Context value as KEY=VALUE (repeatable, overrides cdk.json)
    #[arg(short, long = "context", value_name = "KEY=VALUE", global = true, value_parser = parse_context_pair)]
    pub context: Vec<(String, String)>,

    /// Path to project root holding cdk.json (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synthesize the selected stack (default if no command specified)
    Synth(SynthArgs),

    /// Show the resolved deployment context and where each value came from
    Context(ContextArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `synth` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SynthArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// Write manifest.json into this directory instead of printing
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `context` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContextArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
