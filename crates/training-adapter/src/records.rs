//! JSON records - the scalar, transport-ready form of the domain types
//!
//! Shared by the catalog file, the employee snapshot and any transport
//! that prints employees as JSON.

use serde::{Deserialize, Serialize};
use training_domain::{Course, CourseId, Employee, EmployeeId, Role, RoleId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_id: String,
    pub title: String,
}

/// One entry of the employee snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub current_roles: Vec<RoleRecord>,
    #[serde(default)]
    pub assigned_courses: Vec<CourseRecord>,
}

impl From<&Role> for RoleRecord {
    fn from(role: &Role) -> Self {
        Self {
            role_id: role.id().as_str().to_string(),
            name: role.name().to_string(),
        }
    }
}

impl From<RoleRecord> for Role {
    fn from(record: RoleRecord) -> Self {
        Role::new(RoleId::new(record.role_id), record.name)
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id().as_str().to_string(),
            title: course.title().to_string(),
        }
    }
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Course::new(CourseId::new(record.course_id), record.title)
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id().as_str().to_string(),
            name: employee.name().to_string(),
            current_roles: employee.current_roles().iter().map(RoleRecord::from).collect(),
            assigned_courses: employee
                .assigned_courses()
                .iter()
                .map(CourseRecord::from)
                .collect(),
        }
    }
}

impl From<EmployeeRecord> for Employee {
    /// Sub-records are taken as stored; nothing is recomputed.
    fn from(record: EmployeeRecord) -> Self {
        Employee::restore(
            EmployeeId::new(record.employee_id),
            record.name,
            record.current_roles.into_iter().map(Role::from).collect(),
            record.assigned_courses.into_iter().map(Course::from).collect(),
        )
    }
}
