//! Employee - A person whose required training is tracked
//!
//! Employee is an Entity (has identity).
//! The role list is set by role assignment; the course list is derived
//! from it and is never edited on its own.

use super::assignment::RoleAssignment;
use super::course::Course;
use super::role::Role;

/// Unique identifier for an Employee
///
/// Generated ids look like `E001`, but any string is accepted
/// (e.g. ids written by hand into a snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Format a generated id: `E` followed by the number, zero-padded to 3 digits
    ///
    /// Wider than [`sequence_number`](Self::sequence_number) so the successor
    /// of any parsed suffix is representable.
    pub fn from_sequence(number: u128) -> Self {
        Self(format!("E{:03}", number))
    }

    /// The numeric suffix when the id is `E` followed by digits only
    pub fn sequence_number(&self) -> Option<u64> {
        let digits = self.0.strip_prefix('E')?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee - current roles plus the courses those roles require
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    /// Sorted by role name
    current_roles: Vec<Role>,
    /// Sorted by course id, derived from `current_roles`
    assigned_courses: Vec<Course>,
}

impl Employee {
    /// Create a new Employee with no roles and no courses
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            current_roles: Vec::new(),
            assigned_courses: Vec::new(),
        }
    }

    /// Rebuild an Employee from persisted fields, as written
    pub fn restore(
        id: EmployeeId,
        name: impl Into<String>,
        current_roles: Vec<Role>,
        assigned_courses: Vec<Course>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            current_roles,
            assigned_courses,
        }
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_roles(&self) -> &[Role] {
        &self.current_roles
    }

    pub fn assigned_courses(&self) -> &[Course] {
        &self.assigned_courses
    }

    /// Replace both the role list and the course list.
    ///
    /// Nothing from the previous assignment is carried over.
    pub fn apply_assignment(&mut self, assignment: RoleAssignment) {
        let (roles, courses) = assignment.into_parts();
        self.current_roles = roles;
        self.assigned_courses = courses;
    }
}
