//! Training CLI - Track employees, roles and required training
//!
//! Usage:
//!   training                              - Start interactive mode
//!   training employees list               - List all employees
//!   training employees show <id>          - Show one employee
//!   training employees create <name>      - Create an employee
//!   training employees assign <id> [role] - Replace an employee's roles
//!   training roles                        - List roles
//!   training courses                      - List courses

use clap::Parser;
use console::style;
use tracing::error;
use training_cli::app::{bootstrap, AppOptions};
use training_cli::commands::Command;
use training_cli::interactive::InteractiveCli;
use training_cli::logger;
use training_cli::output::Output;
use training_usecase::TrainingError;

#[derive(Parser)]
#[command(name = "training")]
#[command(about = "Role-based training assignment tracker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    app: AppOptions,

    /// Output as JSON records
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    // Without a catalog the system is useless: stop immediately
    let mut system = match bootstrap(&cli.app) {
        Ok(system) => system,
        Err(e) => {
            error!("FATAL: {:#}. The application cannot start.", e);
            std::process::exit(1);
        }
    };

    let output = Output::new(cli.json);

    let Some(command) = cli.command else {
        return InteractiveCli::new(&mut system, output).run();
    };

    match command.run(&mut system, &output) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => match e.downcast_ref::<TrainingError>() {
            Some(err) if err.is_domain_error() => {
                eprintln!("{} {}", style("error:").red().bold(), err);
                std::process::exit(2);
            }
            _ => Err(e),
        },
    }
}
