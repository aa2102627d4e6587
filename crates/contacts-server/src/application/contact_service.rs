//! Contact Application Service (Use Case)
//!
//! Loader and actions behind the contact page.

use std::sync::Arc;

use contacts::{
    require_contact_id, Contact, ContactPatch, ContactRepository, DomainError, Favourite,
};

/// Application service for Contact operations
pub struct ContactService<R: ContactRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Load a contact for display
    pub async fn load(&self, contact_id: &str) -> Result<Contact, DomainError> {
        let contact_id = require_contact_id(Some(contact_id))?;

        self.repo
            .find_by_id(contact_id)
            .await?
            .ok_or_else(|| DomainError::not_found(contact_id))
    }

    /// Persist the favourite flag decoded from a raw form value
    pub async fn toggle_favourite(
        &self,
        contact_id: &str,
        raw_value: Option<&str>,
    ) -> Result<Contact, DomainError> {
        let contact_id = require_contact_id(Some(contact_id))?;
        let favourite = Favourite::decode(raw_value);

        let updated = self
            .repo
            .update(contact_id, &ContactPatch::favourite(favourite.is_set()))
            .await?;

        tracing::info!("Set favourite={} on contact {}", favourite, updated.id);

        Ok(updated)
    }

    /// Apply edits from the edit form. `favourite` is never touched here.
    pub async fn edit(&self, contact_id: &str, patch: ContactPatch) -> Result<Contact, DomainError> {
        let contact_id = require_contact_id(Some(contact_id))?;
        let patch = ContactPatch {
            favourite: None,
            ..patch
        };

        if patch.is_empty() {
            return self.load(contact_id).await;
        }

        let updated = self.repo.update(contact_id, &patch).await?;
        tracing::info!("Edited contact {}", updated.id);

        Ok(updated)
    }

    /// Delete a contact
    pub async fn destroy(&self, contact_id: &str) -> Result<(), DomainError> {
        let contact_id = require_contact_id(Some(contact_id))?;

        if !self.repo.delete(contact_id).await? {
            return Err(DomainError::not_found(contact_id));
        }

        tracing::info!("Deleted contact {}", contact_id);
        Ok(())
    }

    /// Insert `contacts` when the store holds none, returning how many were added
    pub async fn seed_if_empty(&self, contacts: Vec<Contact>) -> Result<usize, DomainError> {
        if self.repo.count().await? > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for contact in contacts {
            if contact.id.is_empty() {
                return Err(DomainError::Validation(
                    "seed contact without an id".to_string(),
                ));
            }
            self.repo.insert(&contact).await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}
