//! Configuration file and `todolist config` commands
//!
//! Precedence (lowest to highest): built-in defaults, config file
//! (`~/.todolist/config.toml` or `$TODOLIST_CONFIG`), environment
//! (`DATABASE_URL`, `TODOLIST_BIND`), command-line flags.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use todolist_server::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Centralized configuration for the todolist server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub static_dir: PathBuf,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("public"),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl TodoConfig {
    /// Config file path: `$TODOLIST_CONFIG` or ~/.todolist/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("TODOLIST_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".todolist/config.toml")
    }

    /// Load the config file (defaults if it does not exist) and apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).context("Failed to parse config file (invalid TOML)")
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(bind) = lookup("TODOLIST_BIND").filter(|b| !b.is_empty()) {
            self.server.bind = bind
                .parse()
                .context(format!("TODOLIST_BIND is not a socket address: {}", bind))?;
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Show the effective configuration (file + environment)
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(&TodoConfig::config_path(), args.force),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => {
            println!("{}", TodoConfig::config_path().display());
            Ok(())
        }
    }
}

fn run_init(config_path: &Path, force: bool) -> Result<()> {
    write_default_config(config_path, force)?;

    println!("Created config at: {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Set database.url (or export DATABASE_URL)");
    println!("  2. Run: todolist serve");
    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        );
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create config directory: {:?}", parent))?;
    }

    let content = TodoConfig::default().to_toml()?;
    fs::write(config_path, content)
        .context(format!("Failed to write config file: {:?}", config_path))
}

fn run_show() -> Result<()> {
    let config = TodoConfig::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
