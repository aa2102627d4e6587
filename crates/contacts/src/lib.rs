//! Contacts Domain Library
//!
//! Core domain types and interfaces for the contact detail flow.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Contact, ContactPatch)
//!   - `value_objects/`: Immutable value types (Favourite, DisplayName)
//!   - `services/`: Pure rules (view rendering, destroy gate)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Interactive collaborators (confirmation prompts)
//!
//! # Usage
//!
//! ```rust,ignore
//! use contacts::domain::{Contact, render_contact};
//! use contacts::ports::ContactRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    confirm_then_destroy, render_contact, require_contact_id, Contact, ContactPatch, ContactView,
    DestroyOutcome, DisplayName, DomainError, Favourite, FavouriteButton, ViewBlock,
    DELETE_CONFIRMATION_PROMPT, FAVOURITE_FIELD,
};
pub use ports::{AssumeYes, Confirmer, ContactRepository};
