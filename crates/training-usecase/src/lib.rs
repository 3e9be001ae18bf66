//! # Training Use Case Layer
//!
//! Application-specific business rules.
//! `TrainingSystem` owns the Catalog and the Directory and exposes the
//! operations a transport adapter (CLI, HTTP, ...) calls.

pub mod error;
pub mod system;

pub use error::{Result, TrainingError};
pub use system::TrainingSystem;

pub use training_domain;
