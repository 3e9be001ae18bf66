//! File-backed Employee Repository
//!
//! Holds the Directory in memory and rewrites the whole JSON snapshot
//! after every `save`. Without a data path it runs in-memory only and
//! each flush is a logged no-op.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};
use training_domain::{Employee, EmployeeId, EmployeeRepository, RepositoryError};

use super::snapshot::{read_snapshot, write_snapshot};
use crate::error::Result;
use crate::records::EmployeeRecord;

#[derive(Debug, Clone, Default)]
pub struct FileEmployeeRepository {
    employees: BTreeMap<EmployeeId, Employee>,
    data_path: Option<PathBuf>,
}

impl FileEmployeeRepository {
    /// Create an empty repository persisting to `data_path`
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            employees: BTreeMap::new(),
            data_path: Some(data_path.into()),
        }
    }

    /// Create an empty repository that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }

    /// Replace the Directory with the snapshot on disk.
    ///
    /// Returns `false` and leaves the Directory empty when there is no
    /// snapshot, or when it cannot be read or parsed. A bad snapshot is
    /// logged and dropped rather than failing startup.
    pub fn load(&mut self) -> bool {
        let Some(path) = self.data_path.clone() else {
            info!("No data path configured. Starting with a fresh state.");
            return false;
        };

        if !path.exists() {
            info!("Data file not found. Starting with a fresh state.");
            return false;
        }

        match read_snapshot(&path) {
            Ok(records) => {
                self.employees = records
                    .into_iter()
                    .map(|record| {
                        let employee = Employee::from(record);
                        (employee.id().clone(), employee)
                    })
                    .collect();
                info!(
                    "Successfully loaded {} employee(s) from {}",
                    self.employees.len(),
                    path.display()
                );
                true
            }
            Err(err) => {
                error!("Failed to load or parse data file: {}. Starting fresh.", err);
                self.employees.clear();
                false
            }
        }
    }

    /// Write every employee to the snapshot, replacing it
    pub fn flush(&self) -> Result<()> {
        let Some(path) = self.data_path.as_deref() else {
            warn!("No data path configured. State will not be saved.");
            return Ok(());
        };

        let records: Vec<EmployeeRecord> =
            self.employees.values().map(EmployeeRecord::from).collect();
        write_snapshot(path, &records)
    }
}

impl EmployeeRepository for FileEmployeeRepository {
    fn save(&mut self, employee: &Employee) -> std::result::Result<(), RepositoryError> {
        self.employees
            .insert(employee.id().clone(), employee.clone());
        self.flush()?;
        Ok(())
    }

    fn find_by_id(&self, id: &EmployeeId) -> std::result::Result<Option<Employee>, RepositoryError> {
        Ok(self.employees.get(id).cloned())
    }

    fn list_all(&self) -> std::result::Result<Vec<Employee>, RepositoryError> {
        Ok(self.employees.values().cloned().collect())
    }

    fn ids(&self) -> std::result::Result<Vec<EmployeeId>, RepositoryError> {
        Ok(self.employees.keys().cloned().collect())
    }

    fn count(&self) -> std::result::Result<usize, RepositoryError> {
        Ok(self.employees.len())
    }
}
