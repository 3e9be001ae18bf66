//! # Training Domain Layer
//!
//! Pure business logic for role-based training assignment, with zero
//! external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  catalog    - Read-only roles, courses, requirements        ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - AssignmentEngine, EmployeeIdAllocator         ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Rule
//!
//! An employee's course list is never edited directly. It is recomputed
//! from scratch by the `AssignmentEngine` every time the role set changes.

pub mod catalog;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use catalog::Catalog;

pub use model::{
    assignment::RoleAssignment,
    course::{Course, CourseId},
    employee::{Employee, EmployeeId},
    role::{Role, RoleId},
};

pub use repository::employee_repository::{EmployeeRepository, RepositoryError};

pub use service::{
    assignment::{AssignmentEngine, AssignmentError},
    id_allocator::EmployeeIdAllocator,
};
