//! Config command implementation

use std::path::Path;

use crate::{
    config::{config_path, AnalysisConfig},
    core::default_config_path,
    Result,
};

use super::common::to_json;

/// Print the config that analysis commands would use, and where it came
/// from.
pub fn handle_config_show(config: Option<&Path>) -> Result<()> {
    let resolved = AnalysisConfig::resolve(config)?;
    match config_path(config) {
        Some(path) => eprintln!("Using config: {}", path.display()),
        None => eprintln!("Using built-in defaults"),
    }
    println!("{}", to_json(&resolved)?);
    Ok(())
}

/// Write the default config to `path` (or the default location). An
/// existing file is kept unless `force` is set.
pub fn handle_config_init(path: Option<&Path>, force: bool) -> Result<()> {
    let target = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if target.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            target.display()
        );
        return Ok(());
    }

    AnalysisConfig::default().save(&target)?;
    println!("✓ Wrote default config to {}", target.display());
    Ok(())
}
