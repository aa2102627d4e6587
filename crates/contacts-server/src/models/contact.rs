//! Contact DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use contacts::{Contact, ContactPatch, ContactView, FAVOURITE_FIELD};

/// Contact as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub handle: Option<String>,
    pub notes: Option<String>,
    pub favourite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first: contact.first,
            last: contact.last,
            avatar: contact.avatar,
            handle: contact.handle,
            notes: contact.notes,
            favourite: contact.favourite,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

/// Loader payload for the contact page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactPageResponse {
    pub contact: ContactResponse,
    /// Rendering instructions (avatar, name, favourite, handle, notes, actions)
    #[schema(value_type = Object)]
    pub view: ContactView,
}

// ============================================
// Form bodies
// ============================================

/// Favourite toggle form
///
/// Only the literal `true` sets the flag; anything else, or no field, clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FavouriteForm {
    pub favourite: Option<String>,
}

impl FavouriteForm {
    /// Build from raw form pairs. A repeated field keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let favourite = pairs
            .into_iter()
            .find(|(name, _)| name == FAVOURITE_FIELD)
            .map(|(_, value)| value);

        Self { favourite }
    }
}

/// Edit form. Omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EditContactForm {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub handle: Option<String>,
    pub notes: Option<String>,
}

impl From<EditContactForm> for ContactPatch {
    fn from(form: EditContactForm) -> Self {
        Self {
            first: form.first,
            last: form.last,
            avatar: form.avatar,
            handle: form.handle,
            notes: form.notes,
            favourite: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_favourite_keeps_first_value() {
        let form = FavouriteForm::from_pairs(pairs(&[("favourite", "true"), ("favourite", "false")]));
        assert_eq!(form.favourite.as_deref(), Some("true"));

        let form = FavouriteForm::from_pairs(pairs(&[("favourite", "no"), ("favourite", "true")]));
        assert_eq!(form.favourite.as_deref(), Some("no"));
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let form = FavouriteForm::from_pairs(pairs(&[("favorite", "true"), ("x", "1")]));
        assert!(form.favourite.is_none());
    }
}
