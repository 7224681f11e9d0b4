// SPDX-License-Identifier: PMPL-1.0-or-later
//! WebBridge CLI - accessibility and readability analysis for HTML pages

use clap::{Parser, Subcommand, ValueEnum};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use webbridge_analyzer::config::{self, Config};
use webbridge_analyzer::report::{self, OutputFormat};
use webbridge_analyzer::{scanner, Vocabulary};

/// Accessibility and readability analyzer for HTML pages
#[derive(Parser)]
#[command(name = "webbridge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single HTML file
    Analyze {
        /// HTML file to analyze
        file: PathBuf,

        /// Word list replacing the common-words vocabulary for this run
        #[arg(long)]
        common_words: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Also write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze every HTML file in a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Word list replacing the common-words vocabulary for this run
        #[arg(long)]
        common_words: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Write the default configuration file
    InitConfig {
        /// Where to write it
        #[arg(default_value = "webbridge.toml")]
        path: PathBuf,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("webbridge_analyzer=debug,webbridge=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("webbridge_analyzer={0},webbridge={0}", level)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Analyze { file, common_words, format, output, verbose } => {
            let config = config::load_config(&config_path)?;
            init_logging(verbose, &config.log.level);

            let vocabulary = resolve_vocabulary(&config, common_words.as_deref())?;
            let report = scanner::scan_file(&file, &vocabulary)?;
            println!("{}", report::render(&report, format.into()));

            if let Some(path) = output.or(config.report_path) {
                report::write_json(&report, &path)?;
                eprintln!("Report written to {}", path.display());
            }
        }

        Commands::Scan { dir, common_words, format, verbose } => {
            let config = config::load_config(&config_path)?;
            init_logging(verbose, &config.log.level);

            let vocabulary = resolve_vocabulary(&config, common_words.as_deref())?;
            let entries = scanner::scan_directory(&dir, &config.scan, &vocabulary)?;
            println!("{}", report::render_scan(&entries, format.into()));
        }

        Commands::InitConfig { path } => {
            config::write_default_config(&path)?;
            eprintln!("Default configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// The `--common-words` file if given and non-empty, else the configured
/// default word list
fn resolve_vocabulary(
    config: &Config,
    override_path: Option<&Path>,
) -> anyhow::Result<Cow<'static, Vocabulary>> {
    Vocabulary::install_default(Vocabulary::load_or_builtin(&config.common_words_path))?;
    match override_path {
        Some(path) => Ok(Vocabulary::load_override(path)?),
        None => Ok(Cow::Borrowed(Vocabulary::default_words())),
    }
}
