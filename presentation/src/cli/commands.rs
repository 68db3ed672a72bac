//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use ideator_domain::DEFAULT_ALTERNATIVE_COUNT;
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every branding field plus the uniqueness verdict
    Full,
    /// Name, ticker, theme and verdict
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for ideator_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => ideator_domain::OutputFormat::Full,
            OutputFormat::Summary => ideator_domain::OutputFormat::Summary,
            OutputFormat::Json => ideator_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for token-ideator
#[derive(Parser, Debug)]
#[command(name = "token-ideator")]
#[command(author, version, about = "Turn a project idea into token branding")]
#[command(long_about = r#"
Token Ideator turns a free-text project idea into token branding: theme,
name, ticker, palette, tagline, visual style, logo prompt and description.
Generated names are checked against the CoinGecko registry (best effort).

Configuration files are loaded from (in priority order):
1. IDEATOR_* environment variables (e.g. IDEATOR_REGISTRY__TIMEOUT_SECONDS=3)
2. --config <path>     Explicit config file
3. ./ideator.toml      Project-level config
4. ~/.config/token-ideator/config.toml   Global config

Example:
  token-ideator generate "A decentralized lending protocol for small businesses"
  token-ideator --seed 42 -o json generate "An NFT marketplace for generative art"
  token-ideator check "Lending Vault" LNDNG
  token-ideator suggest "Lending Vault" LNDNG
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed for reproducible catalog draws
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format (defaults to the config file, then "summary")
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Skip all network calls (uniqueness verdicts are degraded)
    #[arg(long, global = true)]
    pub offline: bool,

    /// Also write diagnostics to a daily-rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate branding for a project idea and check it against the registry
    Generate {
        /// The project idea (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        idea: Vec<String>,
    },

    /// Check whether a name/ticker pair is already listed
    Check {
        /// Token name (2-50 characters: letters, digits, spaces, '-')
        name: String,
        /// Ticker (1-10 characters: A-Z, 0-9)
        symbol: String,
    },

    /// Show registry metadata for a ticker
    Metadata {
        symbol: String,
    },

    /// Suggest free variants of a taken ticker
    Suggest {
        name: String,
        symbol: String,
    },

    /// Generate prefix+suffix alternative names (offline)
    Alternatives {
        /// How many names to generate
        #[arg(short = 'n', long, default_value_t = DEFAULT_ALTERNATIVE_COUNT)]
        count: usize,
    },

    /// Show notable narratives for a year (offline)
    Trends {
        /// Year between 2018 and 2025; other years fall back to the latest
        year: Option<u16>,
    },

    /// Detect themes, use cases and complexity of an idea (offline)
    Analyze {
        #[arg(required = true, num_args = 1..)]
        idea: Vec<String>,
    },
}

impl Command {
    /// Whether this command talks to the network
    pub fn uses_network(&self) -> bool {
        matches!(
            self,
            Command::Generate { .. }
                | Command::Check { .. }
                | Command::Metadata { .. }
                | Command::Suggest { .. }
        )
    }
}
