//! # Training CLI
//!
//! Command-line transport over the training use cases, plus the startup
//! wiring that loads the Catalog and the employee snapshot.

pub mod app;
pub mod commands;
pub mod interactive;
pub mod logger;
pub mod output;
