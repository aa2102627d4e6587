//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the contact repository.

mod contact_service;
pub mod seed;

pub use contact_service::ContactService;
