//! Error types for the training use cases

use thiserror::Error;
use training_domain::{AssignmentError, EmployeeId, RepositoryError, RoleId};

/// Errors returned by `TrainingSystem` operations
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Employee with ID {employee_id} not found")]
    EmployeeNotFound { employee_id: EmployeeId },

    #[error("Role with ID {role_id} not found")]
    InvalidRole { role_id: RoleId },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The Directory could not be read or written; an in-memory change
    /// may already be applied
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}

impl TrainingError {
    /// Errors caused by the request itself rather than the system
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, TrainingError::Persistence(_))
    }
}

impl From<AssignmentError> for TrainingError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::InvalidRole { role_id } => TrainingError::InvalidRole { role_id },
        }
    }
}

pub type Result<T> = std::result::Result<T, TrainingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TrainingError::EmployeeNotFound {
            employee_id: EmployeeId::new("E404"),
        };
        assert_eq!(err.to_string(), "Employee with ID E404 not found");

        let err: TrainingError = AssignmentError::InvalidRole {
            role_id: RoleId::new("R9"),
        }
        .into();
        assert_eq!(err.to_string(), "Role with ID R9 not found");
    }

    #[test]
    fn test_domain_classification() {
        assert!(TrainingError::InvalidArgument("empty".to_string()).is_domain_error());

        let err: TrainingError = RepositoryError::PersistenceError {
            message: "disk full".to_string(),
        }
        .into();
        assert!(!err.is_domain_error());
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }
}
