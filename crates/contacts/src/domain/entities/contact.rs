//! Contact - one entry in the address book
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::DisplayName;

/// Name of the route parameter carrying the contact identifier
pub const CONTACT_ID_PARAM: &str = "contactId";

/// Contact - a stored person record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    /// X (formerly Twitter) handle, without the leading `@`
    pub handle: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub favourite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a Contact
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPatch {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub handle: Option<String>,
    pub notes: Option<String>,
    pub favourite: Option<bool>,
}

impl Contact {
    /// Create a new Contact with generated ID and timestamps
    pub fn new(
        first: Option<String>,
        last: Option<String>,
        avatar: Option<String>,
        handle: Option<String>,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            first,
            last,
            avatar,
            handle,
            notes,
            favourite: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown in the page heading
    pub fn display_name(&self) -> DisplayName {
        DisplayName::from_parts(self.first.as_deref(), self.last.as_deref())
    }

    /// Apply a patch in place, bumping `updated_at`
    pub fn apply(&mut self, patch: &ContactPatch) {
        if let Some(first) = &patch.first {
            self.first = Some(first.clone());
        }
        if let Some(last) = &patch.last {
            self.last = Some(last.clone());
        }
        if let Some(avatar) = &patch.avatar {
            self.avatar = Some(avatar.clone());
        }
        if let Some(handle) = &patch.handle {
            self.handle = Some(handle.clone());
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
        if let Some(favourite) = patch.favourite {
            self.favourite = favourite;
        }
        self.updated_at = Utc::now();
    }
}

impl ContactPatch {
    /// Patch touching only the favourite flag
    pub fn favourite(value: bool) -> Self {
        Self {
            favourite: Some(value),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Reject an absent or empty contact identifier
pub fn require_contact_id(id: Option<&str>) -> Result<&str, DomainError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(DomainError::MissingParameter(CONTACT_ID_PARAM)),
    }
}
