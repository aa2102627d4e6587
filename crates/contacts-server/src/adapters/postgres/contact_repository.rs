//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;

use contacts::{Contact, ContactPatch, ContactRepository, DomainError};

/// PostgreSQL implementation of ContactRepository
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ContactRow {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar: Option<String>,
    handle: Option<String>,
    notes: Option<String>,
    favourite: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            first: row.first_name,
            last: row.last_name,
            avatar: row.avatar,
            handle: row.handle,
            notes: row.notes,
            favourite: row.favourite,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, DomainError> {
        let row = sqlx::query_as::<_, ContactRow>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: &str, patch: &ContactPatch) -> Result<Contact, DomainError> {
        // One statement, so concurrent writers resolve as last-write-wins
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                avatar = COALESCE($4, avatar),
                handle = COALESCE($5, handle),
                notes = COALESCE($6, notes),
                favourite = COALESCE($7, favourite),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.first)
        .bind(&patch.last)
        .bind(&patch.avatar)
        .bind(&patch.handle)
        .bind(&patch.notes)
        .bind(patch.favourite)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found(id))
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert(&self, contact: &Contact) -> Result<Contact, DomainError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts
                (id, first_name, last_name, avatar, handle, notes, favourite, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&contact.id)
        .bind(&contact.first)
        .bind(&contact.last)
        .bind(&contact.avatar)
        .bind(&contact.handle)
        .bind(&contact.notes)
        .bind(contact.favourite)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }
}
