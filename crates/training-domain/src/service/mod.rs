//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services operate on the Catalog and employees and contain the "verbs" of the domain.

pub mod assignment;
pub mod id_allocator;
