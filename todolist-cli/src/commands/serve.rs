//! HTTP server command
//!
//! Runs the todolist server on PostgreSQL, or on in-memory stores with
//! `--memory`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use todolist_server::db::{create_pool_with_options, migrations, PgItemRepo, PgListRepo};
use todolist_server::http::{run_server, ServerConfig};
use todolist_server::ListResolver;

use crate::config::TodoConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Keep all lists in memory (no database, nothing persists across restarts)
    #[arg(long, conflicts_with = "database_url")]
    pub memory: bool,

    /// Directory with static assets served under /static
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = TodoConfig::load()?;

    let resolver = if args.memory {
        tracing::warn!("Using in-memory stores - lists are lost on exit");
        ListResolver::in_memory()
    } else {
        let database_url = args
            .database_url
            .or(config.database.url)
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.todolist/config.toml")?;
        let max_connections = args
            .max_connections
            .unwrap_or(config.database.max_connections);

        let pool = create_pool_with_options(&database_url, max_connections)
            .await
            .context("Failed to create database pool")?;
        migrations::run(&pool)
            .await
            .context("Failed to run database migrations")?;

        ListResolver::new(
            Arc::new(PgItemRepo::new(pool.clone())),
            Arc::new(PgListRepo::new(pool)),
        )
    };

    let server_config = ServerConfig {
        bind_addr: args.bind.unwrap_or(config.server.bind),
        static_dir: args.static_dir.unwrap_or(config.server.static_dir),
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    tracing::info!("Starting todolist server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(resolver, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
