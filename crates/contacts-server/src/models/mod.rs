//! Contacts API Data Models
//!
//! Request/response DTOs with OpenAPI schemas.

mod contact;

pub use contact::*;
