//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use stylecfg::output::OutputMode;

/// stylecfg - Resolve utility-CSS build configuration
#[derive(Parser, Debug)]
#[command(
    name = "stylecfg",
    version,
    about = "Resolve utility-CSS build configuration",
    long_about = "Merge design-token themes and resolve content globs.\n\n\
                  The theme is the built-in defaults extended by your configuration.\n\
                  The content set is every file matched by the `content` patterns."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: nearest stylecfg.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter stylecfg.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the merged theme
    Theme {
        /// Base theme file to merge into (default: built-in theme)
        #[arg(long)]
        base: Option<PathBuf>,

        /// Reject tokens that are not valid CSS values
        #[arg(long)]
        strict: bool,

        /// Print a single token by dotted path (e.g. colors.primary.100)
        #[arg(long)]
        get: Option<String>,
    },

    /// Print the files matched by the content patterns
    Content {
        /// Directory patterns are relative to (default: config file directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Fail if resolution takes longer than this many milliseconds
        #[arg(long = "timeout-ms")]
        timeout_ms: Option<u64>,
    },

    /// Validate the configuration (strict theme merge and content resolution)
    Check {
        /// Directory patterns are relative to (default: config file directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Base theme file to merge into (default: built-in theme)
        #[arg(long)]
        base: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Theme { base, strict, get }) => {
            commands::theme(config, base.as_deref(), strict, get.as_deref(), output_mode)
        },
        Some(Command::Content { root, timeout_ms }) => {
            commands::content(config, root.as_deref(), timeout_ms, output_mode)
        },
        Some(Command::Check { root, base }) => {
            commands::check(config, root.as_deref(), base.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": stylecfg::VERSION
                    })
                );
            } else {
                println!("stylecfg v{}", stylecfg::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": stylecfg::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("stylecfg v{}", stylecfg::VERSION);
                println!("\nRun 'stylecfg --help' for usage");
                println!("Run 'stylecfg init' to get started");
            }
            Ok(())
        },
    }
}
