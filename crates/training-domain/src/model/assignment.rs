//! RoleAssignment - The outcome of resolving a role request against the Catalog
//!
//! Only the AssignmentEngine builds one, so an employee's course list can
//! only ever come from a full recomputation over its role set.

use super::course::{Course, CourseId};
use super::role::Role;

/// Resolved roles and the courses they require
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    /// Sorted ascending by role name
    roles: Vec<Role>,
    /// Sorted ascending by course id, de-duplicated
    courses: Vec<Course>,
    /// Course ids required by a role mapping but missing from the Catalog
    unresolved_courses: Vec<CourseId>,
}

impl RoleAssignment {
    pub(crate) fn new(
        roles: Vec<Role>,
        courses: Vec<Course>,
        unresolved_courses: Vec<CourseId>,
    ) -> Self {
        Self {
            roles,
            courses,
            unresolved_courses,
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn unresolved_courses(&self) -> &[CourseId] {
        &self.unresolved_courses
    }

    pub(crate) fn into_parts(self) -> (Vec<Role>, Vec<Course>) {
        (self.roles, self.courses)
    }
}
