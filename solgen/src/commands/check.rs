use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use solgen_document::DeclarationKind;
use solgen_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sol.toml (defaults to ./sol.toml)
    #[arg(short, long, default_value = "sol.toml")]
    pub config: PathBuf,
}

/// Declaration counts for a manifest that renders cleanly.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    containers: usize,
    members: usize,
    replacements: usize,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let summary = self.check().unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());
        println!("  {}", plural(summary.containers, "container"));
        println!("  {}", plural(summary.members, "member"));
        println!("  {}", plural(summary.replacements, "replacement"));
        Ok(())
    }

    fn check(&self) -> solgen_manifest::Result<Summary> {
        let manifest = Manifest::from_file(&self.config)?;
        manifest.to_document()?.render()?;

        let containers = manifest
            .declarations
            .iter()
            .filter(|d| d.kind() == DeclarationKind::Container)
            .count();
        Ok(Summary {
            containers,
            members: manifest.declarations.len() - containers,
            replacements: manifest.replacements.len(),
        })
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
