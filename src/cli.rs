//! Command-line interface

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analyzer::Analyzer;
use crate::config::AnalyzerConfig;
use crate::server::{self, AppContext};

#[derive(Parser)]
#[command(name = "prreview", version, about = "Static analysis and review for Python pull requests")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single Python file and print the report as JSON
    Analyze {
        /// Path to the file to analyze
        file: PathBuf,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Path to a TOML file with detector thresholds
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Start the review HTTP service
    Serve {
        /// Port to bind on
        #[arg(long, default_value_t = 8000, env = "PORT")]
        port: u16,
        /// Path to a TOML file with detector thresholds
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => AnalyzerConfig::load(path),
        None => Ok(AnalyzerConfig::default()),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            file,
            compact,
            config,
        } => {
            let config = load_config(config.as_ref())?;
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());

            let report = Analyzer::with_config(&config).analyze(&filename, &source);
            let rendered = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{rendered}");
            Ok(())
        }
        Command::Serve { port, config } => {
            let config = load_config(config.as_ref())?;
            let ctx = Arc::new(AppContext::new(Analyzer::with_config(&config)));
            let addr: SocketAddr = ([0, 0, 0, 0], port).into();

            tokio::runtime::Runtime::new()
                .context("Failed to start async runtime")?
                .block_on(server::serve(addr, ctx))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_analyze_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sample.py");
        std::fs::write(&file, "def f():\n    \"\"\"Doc.\"\"\"\n    pass\n").unwrap();

        let cli = Cli::parse_from(["prreview", "analyze", file.to_str().unwrap(), "--compact"]);
        run(cli).expect("analyze should succeed");
    }

    #[test]
    fn test_analyze_subcommand_args() {
        let cli = Cli::parse_from(["prreview", "analyze", "app.py", "--compact"]);
        match cli.command {
            Command::Analyze { file, compact, .. } => {
                assert_eq!(file, PathBuf::from("app.py"));
                assert!(compact);
            }
            _ => panic!("expected analyze subcommand"),
        }
    }
}
