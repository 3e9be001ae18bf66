//! training employees command

use clap::{Args, Subcommand};
use training_domain::{EmployeeId, EmployeeRepository, RoleId};
use training_usecase::TrainingSystem;

use crate::output::Output;

#[derive(Debug, Args)]
pub struct EmployeesCommand {
    #[command(subcommand)]
    pub command: EmployeesSubcommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum EmployeesSubcommand {
    /// List all employees
    List,
    /// Show one employee with roles and assigned courses
    Show {
        /// Employee ID (e.g. E001)
        id: String,
    },
    /// Create a new employee
    Create {
        /// Full name
        name: String,
    },
    /// Replace an employee's roles and recompute their courses
    Assign {
        /// Employee ID
        id: String,
        /// Role IDs; none clears all roles
        role_ids: Vec<String>,
    },
}

impl EmployeesCommand {
    pub fn run<R: EmployeeRepository>(
        &self,
        system: &mut TrainingSystem<R>,
        output: &Output,
    ) -> anyhow::Result<String> {
        self.command.run(system, output)
    }
}

impl EmployeesSubcommand {
    pub fn run<R: EmployeeRepository>(
        &self,
        system: &mut TrainingSystem<R>,
        output: &Output,
    ) -> anyhow::Result<String> {
        match self {
            EmployeesSubcommand::List => output.employees(&system.list_employees()?),
            EmployeesSubcommand::Show { id } => {
                output.employee(&system.get_employee(&EmployeeId::new(id.as_str()))?)
            }
            EmployeesSubcommand::Create { name } => {
                let employee = system.create_employee(name.trim())?;
                output.employee(&employee)
            }
            EmployeesSubcommand::Assign { id, role_ids } => {
                let role_ids: Vec<RoleId> =
                    role_ids.iter().map(|r| RoleId::new(r.as_str())).collect();
                let employee = system.assign_roles(&EmployeeId::new(id.as_str()), &role_ids)?;
                output.employee(&employee)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use training_adapter::{CatalogConfig, FileEmployeeRepository};
    use training_usecase::TrainingError;

    fn system() -> TrainingSystem<FileEmployeeRepository> {
        let config = r#"{
            "roles": [{"role_id": "R1", "name": "Engineer"}],
            "courses": [{"course_id": "C1", "title": "Intro"}],
            "role_mappings": {"R1": ["C1"]}
        }"#;
        let catalog = CatalogConfig::from_json(config).unwrap().into_catalog();
        TrainingSystem::new(catalog, FileEmployeeRepository::in_memory())
    }

    #[test]
    fn test_create_trims_name() {
        let mut system = system();
        let command = EmployeesSubcommand::Create {
            name: "  Grace Hopper \n".to_string(),
        };

        command.run(&mut system, &Output::new(true)).unwrap();

        let employee = system.get_employee(&EmployeeId::new("E001")).unwrap();
        assert_eq!(employee.name(), "Grace Hopper");
    }

    #[test]
    fn test_whitespace_only_name_is_invalid() {
        let mut system = system();
        let command = EmployeesSubcommand::Create {
            name: " \t ".to_string(),
        };

        let err = command.run(&mut system, &Output::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TrainingError>(),
            Some(TrainingError::InvalidArgument(_))
        ));
        assert!(system.list_employees().unwrap().is_empty());
    }

    #[test]
    fn test_assign_renders_updated_employee() {
        let mut system = system();
        system.create_employee("Grace").unwrap();
        let command = EmployeesSubcommand::Assign {
            id: "E001".to_string(),
            role_ids: vec!["R1".to_string()],
        };

        let rendered = command.run(&mut system, &Output::new(true)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["assigned_courses"][0]["course_id"], "C1");
    }
}
