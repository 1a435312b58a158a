//! Key stretching command.

use clap::Args;
use colored::Colorize;
use zeroize::Zeroizing;

/// Stretch a phrase into 64 bytes of key material.
///
/// Uses the BIP-39 seed function, so the output matches what a BIP-39
/// wallet derives from the same words and passphrase.
#[derive(Args)]
pub struct StretchCommand {
    /// Seed phrase to stretch.
    phrase: String,

    /// Optional passphrase.
    #[arg(short, long)]
    passphrase: Option<String>,
}

impl StretchCommand {
    /// Execute the stretch command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let phrase = Zeroizing::new(self.phrase);
        let passphrase = self.passphrase.map(Zeroizing::new);

        let key = brainseed::stretch(&phrase, passphrase.as_deref().map(String::as_str));
        let key_hex = Zeroizing::new(hex::encode(&*key));

        println!();
        println!("      {}          {}", "Key".cyan().bold(), key_hex.green());
        println!();
        Ok(())
    }
}
