//! Version tag command.

use brainseed::version::{DEFAULT_TAG_LEN, FULL_TAG_LEN};
use clap::builder::RangedU64ValueParser;
use clap::Args;
use colored::Colorize;

/// Print the version tag of a phrase.
#[derive(Args)]
pub struct VersionCommand {
    /// Phrase to tag. Any text is accepted, words are not checked.
    phrase: String,

    /// Number of hex digits to print (1 to 128).
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_TAG_LEN,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=FULL_TAG_LEN as u64)
    )]
    len: usize,
}

impl VersionCommand {
    /// Execute the version command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let tag = brainseed::version_of(&self.phrase, Some(self.len))?;

        println!();
        println!("      {}          {}", "Tag".cyan().bold(), tag.green());
        println!();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(["brainseed", "version"].iter().chain(args))
    }

    #[test]
    fn tag_length_defaults_to_two() {
        let cli = parse(&["lazy dog"]).unwrap();
        assert!(matches!(cli.command, Commands::Version(ref cmd) if cmd.len == 2));
    }

    #[test]
    fn tag_length_bounds() {
        assert!(parse(&["-n", "1", "lazy dog"]).is_ok());
        assert!(parse(&["-n", "128", "lazy dog"]).is_ok());
        assert!(parse(&["-n", "0", "lazy dog"]).is_err());
        assert!(parse(&["-n", "129", "lazy dog"]).is_err());
    }
}
