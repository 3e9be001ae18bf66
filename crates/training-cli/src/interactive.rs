//! Interactive REPL mode

use std::io::{self, BufRead, Write};

use console::style;
use training_domain::EmployeeRepository;
use training_usecase::TrainingSystem;

use crate::commands::{Command, EmployeesCommand, EmployeesSubcommand};
use crate::output::Output;

/// Interactive CLI over a running TrainingSystem
pub struct InteractiveCli<'a, R> {
    system: &'a mut TrainingSystem<R>,
    output: Output,
}

impl<'a, R: EmployeeRepository> InteractiveCli<'a, R> {
    pub fn new(system: &'a mut TrainingSystem<R>, output: Output) -> Self {
        Self { system, output }
    }

    /// Run the interactive REPL until /quit or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Training Tracker Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{} ", style("training>").green());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let input = line.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => println!("{} {}", style("Error:").red().bold(), e),
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns `true` when the session should end.
    pub fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        let command = match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /employees                - List all employees");
                println!("  /show <id>                - Show an employee");
                println!("  /create <name>            - Create an employee");
                println!("  /assign <id> [role ids]   - Replace an employee's roles");
                println!("  /roles                    - List roles");
                println!("  /courses                  - List courses");
                println!("  /quit                     - Exit");
                return Ok(false);
            }
            "/employees" | "/ls" => employees(EmployeesSubcommand::List),
            "/show" => match parts.get(1) {
                Some(id) => employees(EmployeesSubcommand::Show { id: id.to_string() }),
                None => anyhow::bail!("Usage: /show <id>"),
            },
            "/create" => {
                let name = input
                    .split_once(char::is_whitespace)
                    .map(|(_, rest)| rest.trim().to_string())
                    .unwrap_or_default();
                if name.is_empty() {
                    anyhow::bail!("Usage: /create <name>");
                }
                employees(EmployeesSubcommand::Create { name })
            }
            "/assign" => match parts.get(1) {
                Some(id) => employees(EmployeesSubcommand::Assign {
                    id: id.to_string(),
                    role_ids: parts[2..].iter().map(|r| r.to_string()).collect(),
                }),
                None => anyhow::bail!("Usage: /assign <id> [role ids...]"),
            },
            "/roles" => Command::Roles,
            "/courses" => Command::Courses,
            _ => {
                println!("Unknown command: {} (type /help)", cmd);
                return Ok(false);
            }
        };

        let rendered = command.run(&mut *self.system, &self.output)?;
        println!("{}", rendered);
        Ok(false)
    }
}

fn employees(command: EmployeesSubcommand) -> Command {
    Command::Employees(EmployeesCommand { command })
}
