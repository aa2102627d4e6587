//! Domain Entities
//!
//! - Contact: one person in the address book
//! - ContactPatch: partial update applied by the store

mod contact;

pub use contact::*;
