//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use hive::config::Config;

/// Write a default config file
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());
    println!("Set [player] name and [remote] bin_url to enable cloud saves.");

    Ok(())
}
