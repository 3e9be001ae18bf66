//! Employee ID allocation
//!
//! Next id = highest `E<digits>` suffix in use + 1. Ids of any other
//! shape are ignored.
//!
//! Allocation reads the current id set and does not reserve anything;
//! callers must serialize creations (one writer at a time).

use crate::model::employee::EmployeeId;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeIdAllocator;

impl EmployeeIdAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Allocate the id following the highest numbered one in `existing`
    pub fn next<'a>(&self, existing: impl IntoIterator<Item = &'a EmployeeId>) -> EmployeeId {
        let max = existing
            .into_iter()
            .filter_map(EmployeeId::sequence_number)
            .max()
            .unwrap_or(0);
        EmployeeId::from_sequence(u128::from(max) + 1)
    }
}
