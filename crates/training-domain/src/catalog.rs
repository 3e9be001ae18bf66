//! Catalog - The static reference data
//!
//! Roles, courses and the role → course requirement mapping, built once
//! at startup and read-only afterwards.
//!
//! Mapped course ids are NOT checked against the course table here.
//! A dangling id only shows up when an assignment resolves it.

use std::collections::HashMap;

use crate::model::course::{Course, CourseId};
use crate::model::role::{Role, RoleId};

/// Read-only lookup tables for roles, courses and role requirements
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Roles in configuration order
    roles: Vec<Role>,
    role_index: HashMap<RoleId, usize>,
    /// Courses in configuration order
    courses: Vec<Course>,
    course_index: HashMap<CourseId, usize>,
    requirements: HashMap<RoleId, Vec<CourseId>>,
}

impl Catalog {
    /// Build a Catalog.
    ///
    /// A repeated role or course id replaces the earlier definition
    /// but keeps the earlier position.
    pub fn new(
        roles: impl IntoIterator<Item = Role>,
        courses: impl IntoIterator<Item = Course>,
        requirements: impl IntoIterator<Item = (RoleId, Vec<CourseId>)>,
    ) -> Self {
        let mut catalog = Self::default();

        for role in roles {
            match catalog.role_index.get(role.id()) {
                Some(&pos) => catalog.roles[pos] = role,
                None => {
                    catalog.role_index.insert(role.id().clone(), catalog.roles.len());
                    catalog.roles.push(role);
                }
            }
        }

        for course in courses {
            match catalog.course_index.get(course.id()) {
                Some(&pos) => catalog.courses[pos] = course,
                None => {
                    catalog
                        .course_index
                        .insert(course.id().clone(), catalog.courses.len());
                    catalog.courses.push(course);
                }
            }
        }

        catalog.requirements = requirements.into_iter().collect();
        catalog
    }

    /// Find a role by ID
    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.role_index.get(id).map(|&pos| &self.roles[pos])
    }

    /// Find a course by ID
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.course_index.get(id).map(|&pos| &self.courses[pos])
    }

    /// Course ids a role requires (empty when the role has no mapping)
    pub fn required_courses(&self, role_id: &RoleId) -> &[CourseId] {
        self.requirements
            .get(role_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn mapping_count(&self) -> usize {
        self.requirements.len()
    }
}
