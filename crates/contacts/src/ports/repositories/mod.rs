//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod contact_repository;

pub use contact_repository::*;
