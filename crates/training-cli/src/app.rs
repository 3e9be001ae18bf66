//! Startup wiring - builds the TrainingSystem from files on disk
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  bootstrap()                                                  │
//! │    ├── load_catalog(config)      fatal on any failure         │
//! │    ├── FileEmployeeRepository    load(data), empty if absent  │
//! │    ├── TrainingSystem::new       (use case context)           │
//! │    └── seed onboarding           only when nothing was loaded │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;
use training_adapter::{load_catalog, FileEmployeeRepository};
use training_domain::{Employee, EmployeeId, EmployeeRepository};
use training_usecase::TrainingSystem;

/// Employees onboarded on first start
const SEED_EMPLOYEES: &[(&str, &str)] = &[("E001", "Alice"), ("E002", "Bob")];

#[derive(Debug, Clone, Args)]
pub struct AppOptions {
    /// Catalog file with roles, courses and role mappings
    #[arg(long, env = "TRAINING_CONFIG", default_value = "config.json", global = true)]
    pub config: PathBuf,

    /// Employee snapshot file, rewritten after every change
    #[arg(long, env = "TRAINING_DATA", default_value = "data.json", global = true)]
    pub data: PathBuf,

    /// Keep employees in memory only; nothing is read or written
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Do not onboard the initial employees on first start
    #[arg(long, global = true)]
    pub no_seed: bool,
}

/// Load everything the system needs. Any error here is fatal.
pub fn bootstrap(options: &AppOptions) -> anyhow::Result<TrainingSystem<FileEmployeeRepository>> {
    let catalog = load_catalog(&options.config).with_context(|| {
        format!(
            "Configuration file could not be loaded from {}",
            options.config.display()
        )
    })?;

    let mut repository = if options.in_memory {
        FileEmployeeRepository::in_memory()
    } else {
        FileEmployeeRepository::new(&options.data)
    };
    let loaded = repository.load();

    let mut system = TrainingSystem::new(catalog, repository);

    if !loaded && !options.no_seed {
        info!("No existing data found. Onboarding initial employees.");
        seed(&mut system)?;
    }

    Ok(system)
}

/// Onboard the initial employees
pub fn seed<R: EmployeeRepository>(system: &mut TrainingSystem<R>) -> anyhow::Result<()> {
    for (id, name) in SEED_EMPLOYEES {
        system
            .onboard(Employee::new(EmployeeId::new(*id), *name))
            .context("Failed to save initial employees")?;
    }
    Ok(())
}
