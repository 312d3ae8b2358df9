//! Configuration file commands

use anyhow::{bail, Result};
use clap::Subcommand;
use limber_runtime::DemoConfig;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with every default filled in
    Init {
        /// Output path
        #[arg(default_value = "limber.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config (file plus environment overrides)
    Show {
        /// Config path; defaults are shown when omitted
        path: Option<String>,
    },
}

pub fn run(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { path, force } => {
            let path = Path::new(&path);
            if path.exists() && !force {
                bail!("{} exists, pass --force to overwrite", path.display());
            }
            DemoConfig::default().save(path)?;
            println!("Wrote {}", path.display());
        }
        ConfigCommands::Show { path } => {
            let config = match path {
                Some(path) => DemoConfig::load(Path::new(&path))?,
                None => {
                    let mut config = DemoConfig::default();
                    config.apply_overrides(|key| std::env::var(key).ok())?;
                    config
                }
            };
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}
