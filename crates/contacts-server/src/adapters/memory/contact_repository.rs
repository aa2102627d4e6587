//! In-memory implementation of ContactRepository
//!
//! Backs tests and local runs without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use contacts::{Contact, ContactPatch, ContactRepository, DomainError};

#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let contacts = contacts.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, DomainError> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, patch: &ContactPatch) -> Result<Contact, DomainError> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(id))?;

        contact.apply(patch);
        Ok(contact.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.contacts.write().await.remove(id).is_some())
    }

    async fn insert(&self, contact: &Contact) -> Result<Contact, DomainError> {
        let mut contacts = self.contacts.write().await;
        if contacts.contains_key(&contact.id) {
            return Err(DomainError::Validation(format!(
                "contact {} already exists",
                contact.id
            )));
        }

        contacts.insert(contact.id.clone(), contact.clone());
        Ok(contact.clone())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.contacts.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grace() -> Contact {
        Contact::new(
            Some("Grace".to_string()),
            Some("Hopper".to_string()),
            None,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryContactRepository::new();
        let contact = grace();

        repo.insert(&contact).await.unwrap();

        assert_eq!(repo.find_by_id(&contact.id).await.unwrap(), Some(contact));
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let contact = grace();
        let repo = InMemoryContactRepository::with_contacts(vec![contact.clone()]);

        assert!(matches!(
            repo.insert(&contact).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryContactRepository::new();
        let err = repo
            .update("missing", &ContactPatch::favourite(true))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let contact = grace();
        let repo = InMemoryContactRepository::with_contacts(vec![contact.clone()]);

        repo.update(&contact.id, &ContactPatch::favourite(true))
            .await
            .unwrap();
        repo.update(&contact.id, &ContactPatch::favourite(false))
            .await
            .unwrap();

        let stored = repo.find_by_id(&contact.id).await.unwrap().unwrap();
        assert!(!stored.favourite);
    }

    #[tokio::test]
    async fn test_delete() {
        let contact = grace();
        let repo = InMemoryContactRepository::with_contacts(vec![contact.clone()]);

        assert!(repo.delete(&contact.id).await.unwrap());
        assert!(!repo.delete(&contact.id).await.unwrap());
    }
}
