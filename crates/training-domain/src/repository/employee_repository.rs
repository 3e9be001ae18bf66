//! Employee Repository - Abstract persistence for the Employee Directory
//!
//! This trait defines what operations the domain needs.
//! How they're implemented (JSON snapshot, memory) is not our concern here.

use crate::model::employee::{Employee, EmployeeId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Employee not found
    NotFound { id: String },
    /// Failed to persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Employee not found: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Employee Repository Trait
///
/// This is a PORT in hexagonal architecture.
///
/// `save` is the only write and must leave the durable copy matching
/// the in-memory one before it returns (save on every write).
pub trait EmployeeRepository {
    /// Save an employee (create or replace), then persist the Directory
    fn save(&mut self, employee: &Employee) -> Result<(), RepositoryError>;

    /// Find an employee by ID
    fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// List all employees, ordered by ID
    fn list_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// All employee IDs currently in the Directory
    fn ids(&self) -> Result<Vec<EmployeeId>, RepositoryError>;

    /// Check if an employee exists
    fn exists(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Count all employees
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.ids()?.len())
    }
}
