use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tint: theme-color conversions, URL codec and snippets.
#[derive(Parser, Debug)]
#[command(name = "tint", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show a color's normalized form, RGB, HSL, harmonies, luma and theme.
    Convert {
        color: String,
    },
    /// Build the `?b=..&f=..&m=..` query; omitted slots use config defaults.
    Encode {
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        fixed: Option<String>,
        #[arg(long)]
        meta: Option<String>,
        #[arg(long)]
        no_body: bool,
        #[arg(long)]
        no_fixed: bool,
        #[arg(long)]
        no_meta: bool,
    },
    /// Resolve a query string into slot states.
    Decode {
        query: String,
    },
    /// Print the HTML snippet for a query string.
    Snippet {
        query: String,
    },
    /// Print a shareable link for a query string.
    Share {
        query: String,
        /// Base URL override (defaults to `share.base_url`).
        #[arg(long)]
        base: Option<String>,
    },
    /// Print each picker's preset keywords and swatch palette for a query string.
    Presets {
        query: String,
    },
    /// Print the effective config, or write it back to the config file.
    Config {
        /// Write the config to `--config` or the default path instead of printing it.
        #[arg(long)]
        write: bool,
    },
}

impl Command {
    /// Whether this command replaces the config file on disk.
    pub fn writes_config(&self) -> bool {
        matches!(self, Command::Config { write: true })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
