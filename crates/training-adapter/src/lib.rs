//! # Training Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `config/` - Catalog loading from the JSON configuration file
//! - `records` - Scalar JSON records shared by files and transports
//! - `repository/` - Persistence implementations (JSON snapshot)

pub mod config;
pub mod error;
pub mod records;
pub mod repository;

pub use config::{load_catalog, CatalogConfig};
pub use error::{AdapterError, Result};
pub use records::{CourseRecord, EmployeeRecord, RoleRecord};
pub use repository::FileEmployeeRepository;
