//! Seed validation command.

use brainseed::wordlist::expand_in;
use brainseed::{Language, SeedValidator, Version};
use clap::Args;
use colored::Colorize;

/// Check that a phrase is a seed of the expected version.
#[derive(Args)]
pub struct CheckCommand {
    /// Seed phrase to check.
    phrase: String,

    /// Version the seed should carry.
    #[arg(short = 's', long = "seed-version", default_value = "01")]
    version: Version,

    /// Word list language.
    #[arg(short, long, default_value = "english")]
    language: Language,

    /// Expand unique 4-letter prefixes to full words first.
    #[arg(short = 'x', long)]
    expand: bool,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// An invalid phrase is reported and then returned as the error, so the
    /// process exits non-zero.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let phrase = if self.expand {
            expand_in(self.language, &self.phrase)?
        } else {
            self.phrase
        };

        let validator = SeedValidator::new(self.language, self.version.clone());
        let validity = validator.check(&phrase);
        print_validity(&phrase, &self.version, validity.is_valid());

        match validity.error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[rustfmt::skip]
fn print_validity(phrase: &str, version: &Version, valid: bool) {
    let status = if valid { "valid".green() } else { "invalid".red() };
    let words = phrase.split_whitespace().count();

    println!();
    println!("      {}       {}", "Phrase".cyan().bold(), phrase);
    println!("      {}        {words} words", "Words".cyan().bold());
    println!("      {}      {}", "Version".cyan().bold(), version);
    println!("      {}       {}", "Status".cyan().bold(), status.bold());
    println!();
}
