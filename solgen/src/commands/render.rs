use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use solgen_document::Passthrough;
use solgen_manifest::Manifest;
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to sol.toml (defaults to ./sol.toml)
    #[arg(short, long, default_value = "sol.toml")]
    pub config: PathBuf,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip formatting and print the unindented text
    #[arg(long)]
    pub raw: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let source = self.render().unwrap_or_exit();

        match &self.output {
            Some(path) => {
                std::fs::write(path, &source)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                info!("wrote {}", path.display());
            }
            None => println!("{}", source),
        }
        Ok(())
    }

    /// Load the manifest and render it.
    fn render(&self) -> solgen_manifest::Result<String> {
        let mut document = Manifest::from_file(&self.config)?.to_document()?;
        if self.raw {
            document.set_formatter(Passthrough);
        }
        Ok(document.render()?)
    }
}
