//! Rundomizer CLI - unbiased random numbers, words, names and draws
//!
//! # Commands
//!
//! - `rundomizer numbers --from 1 --to 100 -n 10` - Integers in a range
//! - `rundomizer number` - One integer in 1..=100
//! - `rundomizer words -n 3` - Dictionary words
//! - `rundomizer name --gender female` - A first name
//! - `rundomizer nickname -n 5` - Nicknames
//! - `rundomizer quote` - A quote with its author
//! - `rundomizer coin` - Heads or tails
//! - `rundomizer dice -n 2` - Six-sided dice
//! - `rundomizer lottery Иван Пётр Анна` - Draw a winner
//! - `rundomizer check` - Chi-square self-test of the entropy source

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rundomizer_cli::{commands, OutputFormat, RundomizerConfig, Session};
use rundomizer_core::generators::Gender;
use rundomizer_core::sampler::BiasPolicy;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rundomizer random-value generator CLI
#[derive(Parser)]
#[command(name = "rundomizer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "rundomizer.toml")]
    config: PathBuf,

    /// Seed for a reproducible run (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Bias policy (modulo, rejection)
    #[arg(long, global = true)]
    policy: Option<BiasPolicy>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate integers in a range
    Numbers {
        /// Lower bound (inclusive)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        from: i64,

        /// Upper bound (inclusive)
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        to: i64,

        /// How many numbers (1-1000)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Generate one integer between 1 and 100
    Number,

    /// Pick random words
    Words {
        /// How many words (1-10)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Pick a first name
    Name {
        /// Gender (male, female); random when omitted
        #[arg(short, long)]
        gender: Option<Gender>,
    },

    /// Generate nicknames
    Nickname {
        /// How many nicknames (1-5)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Pick a quote
    Quote,

    /// Flip a coin
    Coin,

    /// Roll six-sided dice
    Dice {
        /// How many dice (1-6)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Draw winners from a participant list
    Lottery {
        /// Participant names
        #[arg(required = true, num_args = 1..)]
        participants: Vec<String>,

        /// Draw this many distinct winners
        #[arg(short, long)]
        winners: Option<usize>,
    },

    /// Run a chi-square uniformity self-test
    Check {
        /// Lower bound of the tested range
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,

        /// Upper bound of the tested range
        #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
        max: i64,

        /// Number of draws
        #[arg(short, long, default_value_t = 100_000)]
        trials: u64,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<RundomizerConfig> {
    let mut config = RundomizerConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_env_override();

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn dictionary_source(config: &RundomizerConfig) -> &Path {
    config
        .dictionary
        .as_deref()
        .unwrap_or_else(|| Path::new("<builtin>"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(if cli.verbose { "debug" } else { config.log_level.as_str() });
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(
        policy = %config.policy,
        seeded = config.seed.is_some(),
        dictionary = %dictionary_source(&config).display(),
        "configuration loaded"
    );

    let mut session = Session::from_config(&config, cli.format)?;
    let session = &mut session;

    let output = match cli.command {
        Commands::Numbers { from, to, count } => commands::numbers::run(session, from, to, count),
        Commands::Number => commands::numbers::run_single(session),
        Commands::Words { count } => commands::words::run(session, count),
        Commands::Name { gender } => commands::names::run(session, gender),
        Commands::Nickname { count } => commands::names::run_nicknames(session, count),
        Commands::Quote => commands::quote::run(session),
        Commands::Coin => commands::coin::run(session),
        Commands::Dice { count } => commands::dice::run(session, count),
        Commands::Lottery {
            participants,
            winners,
        } => commands::lottery::run(session, &participants, winners),
        Commands::Check { min, max, trials } => commands::check::run(session, min, max, trials),
    }?;

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_value_types() {
        let cli = Cli::try_parse_from([
            "rundomizer",
            "--policy",
            "rejection",
            "--format",
            "json",
            "--seed",
            "7",
            "name",
            "--gender",
            "female",
        ])
        .unwrap();

        assert_eq!(cli.policy, Some(BiasPolicy::Rejection));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.seed, Some(7));
        assert!(matches!(
            cli.command,
            Commands::Name {
                gender: Some(Gender::Female)
            }
        ));
    }

    #[test]
    fn test_parse_defaults_and_negative_bounds() {
        let cli =
            Cli::try_parse_from(["rundomizer", "numbers", "--from", "-10", "--to", "-1"]).unwrap();

        assert_eq!(cli.policy, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.config, PathBuf::from("rundomizer.toml"));
        assert!(matches!(
            cli.command,
            Commands::Numbers {
                from: -10,
                to: -1,
                count: 1
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["rundomizer", "--policy", "fair", "coin"]).is_err());
    }

    #[test]
    fn test_lottery_requires_participants() {
        assert!(Cli::try_parse_from(["rundomizer", "lottery"]).is_err());
    }
}
