mod check;
mod render;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use render::RenderCommand;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for solgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "solgen")]
#[command(version)]
#[command(about = "Render Solidity source from TOML declarations")]
pub(crate) struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }

    /// Install the stderr log subscriber.
    pub fn init_logging(&self) -> Result<()> {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| eyre!("failed to set tracing subscriber: {}", e))
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render sol.toml to Solidity source
    Render(RenderCommand),

    /// Validate sol.toml and check that it renders
    Check(CheckCommand),
}
