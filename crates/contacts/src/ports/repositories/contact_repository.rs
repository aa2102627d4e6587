//! Contact Repository Port
//!
//! Abstract interface for Contact persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Contact, ContactPatch};

/// Repository interface for Contact entities
///
/// Implementations give no ordering guarantee beyond their own writes:
/// concurrent updates to the same contact are last-write-wins.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a Contact by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, DomainError>;

    /// Apply a partial update and return the stored result.
    /// Fails with `NotFound` when no contact has this ID.
    async fn update(&self, id: &str, patch: &ContactPatch) -> Result<Contact, DomainError>;

    /// Delete a Contact by ID, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    /// Insert a new Contact
    async fn insert(&self, contact: &Contact) -> Result<Contact, DomainError>;

    /// Number of stored contacts
    async fn count(&self) -> Result<i64, DomainError>;
}
