//! Domain Models - The vocabulary of the training tracker
//!
//! These types represent the "Ubiquitous Language" of the system.

pub mod assignment;
pub mod course;
pub mod employee;
pub mod role;
