//! PostgreSQL storage gateway.
//!
//! The pool is built once from the connection string at startup and shared
//! by every request for the life of the process. A connection failure here
//! is fatal; callers abort instead of retrying.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::model::{Contact, ContactPatch, NewContact};

use super::errors::{StoreError, StoreResult};
use super::ContactStore;

/// Maximum connections held by the shared pool.
const MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL-backed contact store
#[derive(Debug, Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    /// Connect to the store and bring the schema up to date.
    pub async fn connect(uri: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(uri)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (for callers that manage their own connection).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT id, first_name, last_name, email, favorite_color, birthday \
             FROM contacts",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Contact>> {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT id, first_name, last_name, email, favorite_color, birthday \
             FROM contacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn insert(&self, fields: NewContact) -> StoreResult<Contact> {
        let contact = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (first_name, last_name, email, favorite_color, birthday) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, first_name, last_name, email, favorite_color, birthday",
        )
        .bind(fields.first_name)
        .bind(fields.last_name)
        .bind(fields.email)
        .bind(fields.favorite_color)
        .bind(fields.birthday)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn update_by_id(&self, id: Uuid, patch: ContactPatch) -> StoreResult<Option<Contact>> {
        // COALESCE keeps every column the patch did not supply.
        let contact = sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 email = COALESCE($4, email), \
                 favorite_color = COALESCE($5, favorite_color), \
                 birthday = COALESCE($6, birthday) \
             WHERE id = $1 \
             RETURNING id, first_name, last_name, email, favorite_color, birthday",
        )
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.email)
        .bind(patch.favorite_color)
        .bind(patch.birthday)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
