//! CLI command definitions and handlers.

mod check;
mod new;
mod stretch;
mod version;

pub use check::CheckCommand;
use clap::{Parser, Subcommand};
pub use new::NewCommand;
pub use stretch::StretchCommand;
pub use version::VersionCommand;

/// Brainseed - generate and check versioned brain seed phrases.
#[derive(Parser)]
#[command(name = "brainseed")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available seed commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new brain seed.
    #[command(alias = "generate")]
    New(NewCommand),

    /// Check that a phrase is a seed of the expected version.
    #[command(alias = "validate")]
    Check(CheckCommand),

    /// Print the version tag of a phrase.
    Version(VersionCommand),

    /// Stretch a phrase into 64 bytes of key material.
    Stretch(StretchCommand),
}
