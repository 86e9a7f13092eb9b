//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default)
//! - Stores sit behind traits so the resolver runs on PostgreSQL or in memory
//! - Rely on DB constraints and conditional writes, no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
