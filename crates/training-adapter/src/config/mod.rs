//! Configuration sources for the static reference data

pub mod catalog_loader;

pub use catalog_loader::{load_catalog, CatalogConfig};
