//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from training-domain.

pub mod file;
pub mod snapshot;

pub use file::FileEmployeeRepository;
