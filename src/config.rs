//! Startup configuration
//!
//! Resolution priority, highest first:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default
//!
//! Environment variables are handled by clap's `env` attributes, so
//! tiers 1 and 2 collapse into the parsed [`Args`].

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default port when neither CLI, environment, nor config file names one
pub const DEFAULT_PORT: u16 = 8710;

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "album-manager")]
#[command(about = "Web UI for managing an album collection")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "ALBUM_MANAGER_PORT")]
    pub port: Option<u16>,

    /// Path to the SQLite database file
    #[arg(short, long, env = "ALBUM_MANAGER_DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "ALBUM_MANAGER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Values read from the TOML config file; all optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    port: Option<u16>,
    database: Option<PathBuf>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: PathBuf,
}

impl Config {
    /// Resolve configuration from arguments, config file, and defaults
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = load_config_file(args.config.as_deref())?;
        Ok(merge(args, file))
    }
}

fn merge(args: &Args, file: ConfigFile) -> Config {
    Config {
        port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
        database: args
            .database
            .clone()
            .or(file.database)
            .unwrap_or_else(default_database_path),
    }
}

/// Load the config file. An explicitly named file must exist and parse;
/// a missing file at the default location is not an error.
fn load_config_file(explicit: Option<&Path>) -> Result<ConfigFile> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(ConfigFile::default()),
        },
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-manager").join("config.toml"))
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("album-manager"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("albums.db")
}
