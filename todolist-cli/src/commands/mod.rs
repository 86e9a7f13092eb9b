//! Command implementations for the todolist CLI

pub mod serve;

pub use serve::run_serve;
