//! Assignment Engine - Derives required training from a role set
//!
//! 1. Resolve: every requested role id must exist in the Catalog
//! 2. Union: collect the course ids every requested role requires
//! 3. Resolve courses: keep the ones the Catalog knows, report the rest
//!
//! This is pure domain logic - no I/O, no logging. Unresolved course
//! ids are handed back to the caller to report.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::model::assignment::RoleAssignment;
use crate::model::course::CourseId;
use crate::model::role::RoleId;

/// Errors raised while resolving a role request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// A requested role id is not in the Catalog
    InvalidRole { role_id: RoleId },
}

impl core::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AssignmentError::InvalidRole { role_id } => {
                write!(f, "Role with ID {} not found", role_id)
            }
        }
    }
}

impl std::error::Error for AssignmentError {}

/// AssignmentEngine - stateless; all state lives in the Catalog and the Employee
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentEngine;

impl AssignmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a requested role set into roles and required courses.
    ///
    /// Fails on the first unknown role id; nothing is computed past it.
    /// An empty request resolves to an empty assignment.
    pub fn resolve(
        &self,
        catalog: &Catalog,
        role_ids: &[RoleId],
    ) -> Result<RoleAssignment, AssignmentError> {
        let mut roles = Vec::with_capacity(role_ids.len());
        for role_id in role_ids {
            let role = catalog
                .role(role_id)
                .ok_or_else(|| AssignmentError::InvalidRole {
                    role_id: role_id.clone(),
                })?;
            roles.push(role.clone());
        }

        // Stable: equal names keep request order
        roles.sort_by(|a, b| a.name().cmp(b.name()));

        let required: BTreeSet<&CourseId> = role_ids
            .iter()
            .flat_map(|role_id| catalog.required_courses(role_id))
            .collect();

        let mut courses = Vec::with_capacity(required.len());
        let mut unresolved = Vec::new();
        for course_id in required {
            match catalog.course(course_id) {
                Some(course) => courses.push(course.clone()),
                None => unresolved.push(course_id.clone()),
            }
        }

        Ok(RoleAssignment::new(roles, courses, unresolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::Course;
    use crate::model::employee::{Employee, EmployeeId};
    use crate::model::role::Role;

    fn ids<T: AsRef<str>>(items: &[T]) -> Vec<RoleId> {
        items.iter().map(|s| RoleId::new(s.as_ref())).collect()
    }

    fn course_ids(assignment: &RoleAssignment) -> Vec<&str> {
        assignment.courses().iter().map(|c| c.id().as_str()).collect()
    }

    /// R1: Engineer → [C1, C2], R2: Manager → [C2, C3]
    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                Role::new(RoleId::new("R1"), "Engineer"),
                Role::new(RoleId::new("R2"), "Manager"),
            ],
            vec![
                Course::new(CourseId::new("C1"), "Intro"),
                Course::new(CourseId::new("C2"), "Safety"),
                Course::new(CourseId::new("C3"), "Leadership"),
            ],
            vec![
                (RoleId::new("R1"), vec![CourseId::new("C1"), CourseId::new("C2")]),
                (RoleId::new("R2"), vec![CourseId::new("C2"), CourseId::new("C3")]),
            ],
        )
    }

    #[test]
    fn test_single_role() {
        let engine = AssignmentEngine::new();
        let assignment = engine.resolve(&sample_catalog(), &ids(&["R1"])).unwrap();

        assert_eq!(course_ids(&assignment), vec!["C1", "C2"]);
        assert!(assignment.unresolved_courses().is_empty());
    }

    #[test]
    fn test_union_is_deduplicated_and_sorted() {
        let engine = AssignmentEngine::new();
        let assignment = engine
            .resolve(&sample_catalog(), &ids(&["R2", "R1"]))
            .unwrap();

        assert_eq!(course_ids(&assignment), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_roles_sorted_by_name() {
        let catalog = Catalog::new(
            vec![
                Role::new(RoleId::new("A"), "Zeta"),
                Role::new(RoleId::new("B"), "Alpha"),
                Role::new(RoleId::new("C"), "Mid"),
            ],
            Vec::new(),
            Vec::new(),
        );

        let assignment = AssignmentEngine::new()
            .resolve(&catalog, &ids(&["A", "C", "B"]))
            .unwrap();

        let names: Vec<&str> = assignment.roles().iter().map(Role::name).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = AssignmentEngine::new()
            .resolve(&sample_catalog(), &ids(&["R1", "R9", "R8"]))
            .unwrap_err();

        // The first missing id is named
        assert_eq!(
            err,
            AssignmentError::InvalidRole {
                role_id: RoleId::new("R9")
            }
        );
        assert_eq!(err.to_string(), "Role with ID R9 not found");
    }

    #[test]
    fn test_dangling_course_is_skipped_and_reported() {
        let catalog = Catalog::new(
            vec![Role::new(RoleId::new("R1"), "Engineer")],
            vec![Course::new(CourseId::new("C1"), "Intro")],
            vec![(
                RoleId::new("R1"),
                vec![CourseId::new("C1"), CourseId::new("C404")],
            )],
        );

        let assignment = AssignmentEngine::new()
            .resolve(&catalog, &ids(&["R1"]))
            .unwrap();

        assert_eq!(course_ids(&assignment), vec!["C1"]);
        assert_eq!(assignment.unresolved_courses(), &[CourseId::new("C404")]);
    }

    #[test]
    fn test_role_without_mapping_requires_nothing() {
        let catalog = Catalog::new(
            vec![Role::new(RoleId::new("R1"), "Engineer")],
            Vec::new(),
            Vec::new(),
        );

        let assignment = AssignmentEngine::new()
            .resolve(&catalog, &ids(&["R1"]))
            .unwrap();

        assert_eq!(assignment.roles().len(), 1);
        assert!(assignment.courses().is_empty());
    }

    #[test]
    fn test_empty_request_clears_everything() {
        let engine = AssignmentEngine::new();
        let catalog = sample_catalog();
        let mut employee = Employee::new(EmployeeId::new("E001"), "Alice");
        employee.apply_assignment(engine.resolve(&catalog, &ids(&["R1"])).unwrap());

        employee.apply_assignment(engine.resolve(&catalog, &[]).unwrap());

        assert!(employee.current_roles().is_empty());
        assert!(employee.assigned_courses().is_empty());
    }

    #[test]
    fn test_reassignment_replaces_instead_of_merging() {
        let catalog = Catalog::new(
            vec![
                Role::new(RoleId::new("R1"), "Engineer"),
                Role::new(RoleId::new("R2"), "Manager"),
            ],
            vec![
                Course::new(CourseId::new("C1"), "Intro"),
                Course::new(CourseId::new("C3"), "Leadership"),
            ],
            vec![
                (RoleId::new("R1"), vec![CourseId::new("C1")]),
                (RoleId::new("R2"), vec![CourseId::new("C3")]),
            ],
        );
        let engine = AssignmentEngine::new();
        let mut employee = Employee::new(EmployeeId::new("E001"), "Alice");

        employee.apply_assignment(engine.resolve(&catalog, &ids(&["R1"])).unwrap());
        employee.apply_assignment(engine.resolve(&catalog, &ids(&["R2"])).unwrap());

        let courses: Vec<&str> = employee
            .assigned_courses()
            .iter()
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(courses, vec!["C3"]);
        assert_eq!(employee.current_roles().len(), 1);
    }
}
