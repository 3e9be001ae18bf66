//! TrainingSystem - The context object every operation runs against
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ TrainingSystem                               │
//! │   catalog   : Catalog        (read-only)     │
//! │   employees : R              (the Directory) │
//! │   engine    : AssignmentEngine               │
//! │   allocator : EmployeeIdAllocator            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Mutations take `&mut self`: one writer at a time. Every successful
//! mutation is persisted through the repository before returning.

use tracing::{info, warn};
use training_domain::{
    AssignmentEngine, Catalog, Course, Employee, EmployeeId, EmployeeIdAllocator,
    EmployeeRepository, Role, RoleId,
};

use crate::error::{Result, TrainingError};

pub struct TrainingSystem<R> {
    catalog: Catalog,
    employees: R,
    engine: AssignmentEngine,
    allocator: EmployeeIdAllocator,
}

impl<R: EmployeeRepository> TrainingSystem<R> {
    /// Wire a system from a loaded Catalog and an already-loaded Directory
    pub fn new(catalog: Catalog, employees: R) -> Self {
        Self {
            catalog,
            employees,
            engine: AssignmentEngine::new(),
            allocator: EmployeeIdAllocator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn repository(&self) -> &R {
        &self.employees
    }

    /// All employees, ordered by ID
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.list_all()?)
    }

    pub fn get_employee(&self, employee_id: &EmployeeId) -> Result<Employee> {
        self.employees
            .find_by_id(employee_id)?
            .ok_or_else(|| TrainingError::EmployeeNotFound {
                employee_id: employee_id.clone(),
            })
    }

    /// Create an employee under the next free `E<nnn>` id.
    ///
    /// The name is stored as given; trimming is up to the caller.
    pub fn create_employee(&mut self, name: &str) -> Result<Employee> {
        if name.trim().is_empty() {
            return Err(TrainingError::InvalidArgument(
                "Employee name cannot be empty".to_string(),
            ));
        }

        let existing = self.employees.ids()?;
        let employee = Employee::new(self.allocator.next(&existing), name);
        self.onboard(employee.clone())?;
        Ok(employee)
    }

    /// Insert a fully built employee and persist
    pub fn onboard(&mut self, employee: Employee) -> Result<()> {
        self.employees.save(&employee)?;
        info!(
            employee_id = %employee.id(),
            "Onboarded new employee: {}",
            employee.name()
        );
        Ok(())
    }

    /// Roles in configuration order
    pub fn list_roles(&self) -> Vec<Role> {
        self.catalog.roles().to_vec()
    }

    /// Courses in configuration order
    pub fn list_courses(&self) -> Vec<Course> {
        self.catalog.courses().to_vec()
    }

    /// Replace an employee's roles and recompute their courses.
    ///
    /// Nothing changes when the employee or any role is unknown.
    pub fn assign_roles(
        &mut self,
        employee_id: &EmployeeId,
        role_ids: &[RoleId],
    ) -> Result<Employee> {
        let mut employee = self.get_employee(employee_id)?;
        let assignment = self.engine.resolve(&self.catalog, role_ids)?;

        let role_names: Vec<&str> = assignment.roles().iter().map(Role::name).collect();
        info!(
            employee_id = %employee.id(),
            "Assigning roles {:?} to {}",
            role_names,
            employee.name()
        );

        for course_id in assignment.unresolved_courses() {
            warn!(
                course_id = %course_id,
                "Course ID '{}' required by one of the assigned roles was not found",
                course_id
            );
        }

        employee.apply_assignment(assignment);
        info!(
            employee_id = %employee.id(),
            "Assigned {} unique course(s) to {} for the new roles",
            employee.assigned_courses().len(),
            employee.name()
        );

        self.employees.save(&employee)?;
        Ok(employee)
    }
}
