//! Contacts API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use contacts::{ContactView, FAVOURITE_FIELD};

/// API Client for the Contacts server
pub struct ContactsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub favourite: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ContactPage {
    pub contact: ContactResponse,
    pub view: ContactView,
}

#[derive(Debug, Default, Serialize)]
pub struct EditContactForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ContactsClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn contact_url(&self, contact_id: &str, action: Option<&str>) -> String {
        let base = format!(
            "{}/contacts/{}",
            self.base_url,
            urlencoding::encode(contact_id)
        );
        match action {
            Some(action) => format!("{}/{}", base, action),
            None => base,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let resp = self
            .authorized(request)
            .send()
            .await
            .context("Failed to connect to Contacts API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(resp)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Load a contact page (record plus rendering instructions)
    pub async fn get_contact(&self, contact_id: &str) -> Result<ContactPage> {
        tracing::debug!("GET contact {}", contact_id);
        let resp = self
            .send(self.client.get(self.contact_url(contact_id, None)))
            .await?;

        resp.json().await.context("Failed to parse response")
    }

    /// Submit the favourite form with a raw value, exactly as given
    pub async fn set_favourite(&self, contact_id: &str, raw_value: &str) -> Result<ContactResponse> {
        tracing::debug!("POST favourite={:?} to contact {}", raw_value, contact_id);
        let request = self
            .client
            .post(self.contact_url(contact_id, None))
            .form(&[(FAVOURITE_FIELD, raw_value)]);

        let resp = self.send(request).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Submit the edit form
    pub async fn edit_contact(
        &self,
        contact_id: &str,
        form: &EditContactForm,
    ) -> Result<ContactResponse> {
        let request = self
            .client
            .post(self.contact_url(contact_id, Some("edit")))
            .form(form);

        let resp = self.send(request).await?;
        resp.json().await.context("Failed to parse response")
    }

    /// Delete a contact. Callers gate this behind a confirmation.
    pub async fn destroy_contact(&self, contact_id: &str) -> Result<()> {
        self.send(self.client.post(self.contact_url(contact_id, Some("destroy"))))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_url_encodes_id() {
        let client = ContactsClient::new("http://localhost:8000/", None);

        assert_eq!(
            client.contact_url("abc", None),
            "http://localhost:8000/contacts/abc"
        );
        assert_eq!(
            client.contact_url("a b/c", Some("destroy")),
            "http://localhost:8000/contacts/a%20b%2Fc/destroy"
        );
    }
}
