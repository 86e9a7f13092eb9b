//! todolist-server: multi-list todo tracker
//!
//! A default "Today" list of standalone items plus any number of named
//! lists with embedded items, stored in PostgreSQL (or in memory) and
//! rendered as server-side HTML.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod resolver;

pub use error::{Error, Result};
pub use resolver::{ListResolver, Resolution};
