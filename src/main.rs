//! Word Families - CLI
//!
//! Inspects how a word list splits into families when one letter is revealed.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};
use word_families::{
    commands::{pick_from_largest, summarize},
    core::{DEFAULT_GROWTH_INCREMENT, FamilyConfig},
    family::FamilyList,
    output::{print_families, print_summary},
    wordlists::{
        SAMPLE,
        loader::{load_from_file, words_of_length},
    },
};

#[derive(Parser)]
#[command(
    name = "families",
    about = "Partition a word list into letter-signature families",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line (default: built-in sample)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Only use words of this length (default: length of the first word)
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Word slots added each time a family fills up
    #[arg(short = 'i', long, global = true, default_value_t = DEFAULT_GROWTH_INCREMENT)]
    increment: usize,

    /// Random seed for word picks (default: current time)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every family with its words
    Dump {
        /// Letter to reveal
        letter: char,
    },

    /// Print the family with the most words
    Largest {
        /// Letter to reveal
        letter: char,
    },

    /// Pick random words from the largest family
    Pick {
        /// Letter to reveal
        letter: char,

        /// Number of words to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Show a colored overview of family sizes
    Summary {
        /// Letter to reveal
        letter: char,
    },
}

/// Load the dictionary from `path`, or fall back to the built-in sample
fn load_dictionary(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(SAMPLE.iter().map(|&word| word.to_string()).collect()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.words.as_deref())?;
    let length = cli
        .length
        .or_else(|| dictionary.first().map(|word| word.chars().count()))
        .context("Word list is empty")?;

    let words = words_of_length(&dictionary, length);
    if words.is_empty() {
        bail!("No words of length {length} in the word list");
    }
    log::info!("loaded {} words of length {length}", words.len());

    let config = match cli.seed {
        Some(seed) => FamilyConfig::with_seed(cli.increment, seed),
        None => FamilyConfig::new(cli.increment),
    }?;

    match cli.command {
        Commands::Dump { letter } => {
            let families = FamilyList::try_build(&words, letter, &config)?;
            print_families(&families);
        }
        Commands::Largest { letter } => {
            let families = FamilyList::try_build(&words, letter, &config)?;
            if let Some(largest) = families.largest() {
                println!("{} {}", largest.signature(), largest.count());
            }
        }
        Commands::Pick { letter, count } => {
            let families = FamilyList::try_build(&words, letter, &config)?;
            let mut rng = config.seeded_rng();
            for word in pick_from_largest(&families, &mut rng, count)? {
                println!("{word}");
            }
        }
        Commands::Summary { letter } => {
            let families = FamilyList::try_build(&words, letter, &config)?;
            print_summary(&summarize(&families));
        }
    }

    Ok(())
}
