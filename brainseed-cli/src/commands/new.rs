//! Seed generation command.

use brainseed::config::DEFAULT_STRENGTH;
use brainseed::{BrainSeed, Entropy, GenerateConfig, JitterCollector, Language, Version};
use clap::Args;
use colored::Colorize;
use futures::executor::block_on;
use rand_core::OsRng;
use zeroize::Zeroizing;

/// Generate a new brain seed.
#[derive(Args)]
pub struct NewCommand {
    /// Entropy as `text:<words>`, `hex:<bytes>` or `u32:<n,n,...>`.
    ///
    /// Without it, entropy is collected from clock jitter.
    #[arg(short, long)]
    entropy: Option<Entropy>,

    /// Seed strength in bits (1 to 256).
    #[arg(short, long, default_value_t = DEFAULT_STRENGTH)]
    bits: u32,

    /// Version the seed must carry (1 to 3 hex digits).
    #[arg(short = 's', long = "seed-version", default_value = "01")]
    version: Version,

    /// Word list language.
    #[arg(short, long, default_value = "english")]
    language: Language,

    /// Also print the stretched key.
    #[arg(short, long)]
    key: bool,

    /// Passphrase mixed into the stretched key.
    #[arg(short, long, requires = "key")]
    passphrase: Option<String>,
}

impl NewCommand {
    /// Execute the new command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = GenerateConfig::new()
            .with_bits(self.bits)
            .with_version(self.version)
            .with_language(self.language);

        let seed = if let Some(entropy) = self.entropy {
            config = config.with_entropy(entropy);
            brainseed::generate(&config)?
        } else {
            log::info!("no entropy supplied, sampling clock jitter");
            let collector = JitterCollector::new();
            block_on(brainseed::generate_with_collector(
                &config,
                &collector,
                &mut OsRng,
            ))?
        };

        let key = self.key.then(|| {
            let stretched = seed.to_seed(self.passphrase.as_deref());
            Zeroizing::new(hex::encode(&*stretched))
        });
        print_seed(&seed, key.as_deref().map(String::as_str));
        Ok(())
    }
}

#[rustfmt::skip]
fn print_seed(seed: &BrainSeed, key: Option<&str>) {
    println!();
    println!("      {}     {}", "Language".cyan().bold(), seed.language());
    println!("      {}      {}", "Version".cyan().bold(), seed.version());
    println!("      {}        {} words", "Words".cyan().bold(), seed.word_count());
    println!("      {}        {}", "Nonce".cyan().bold(), seed.nonce());
    println!("      {}       {}", "Phrase".cyan().bold(), seed.phrase().green());
    if let Some(key) = key {
        println!("      {}          {}", "Key".cyan().bold(), key.green());
    }
    println!();
}
