//! Configuration CLI command handlers

use crate::cli::commands::ConfigCommand;
use crate::core::config::Config;
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Path => handle_path(),
        ConfigCommand::Show => handle_show(),
    }
}

fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}

fn handle_show() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load_from(&path)?;

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
