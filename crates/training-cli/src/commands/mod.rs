//! CLI Commands

pub mod employees;

pub use employees::{EmployeesCommand, EmployeesSubcommand};

use clap::Subcommand;
use training_domain::EmployeeRepository;
use training_usecase::TrainingSystem;

use crate::output::Output;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage employees and their roles
    Employees(EmployeesCommand),
    /// List all available roles
    Roles,
    /// List all courses in the catalog
    Courses,
}

impl Command {
    /// Run against the system, returning the rendered result
    pub fn run<R: EmployeeRepository>(
        &self,
        system: &mut TrainingSystem<R>,
        output: &Output,
    ) -> anyhow::Result<String> {
        match self {
            Command::Employees(cmd) => cmd.run(system, output),
            Command::Roles => output.roles(&system.list_roles()),
            Command::Courses => output.courses(&system.list_courses()),
        }
    }
}
