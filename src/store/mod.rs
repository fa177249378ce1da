//! # Storage Gateway
//!
//! Mediates all reads and writes of contact records. The gateway is a
//! single long-lived handle established at startup and shared by every
//! request; the store behind it is the sole owner of the records.

pub mod errors;
pub mod memory;
pub mod postgres;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryContactStore;
pub use postgres::PgContactStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Contact, ContactPatch, NewContact};

/// Storage gateway trait for contact records.
///
/// Every operation is a single round trip to the store. Identifier
/// assignment happens inside the store on insert.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch every contact in the store.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Fetch a single contact, or `None` if the id matches nothing.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Contact>>;

    /// Persist a new contact and return it with its assigned id.
    async fn insert(&self, fields: NewContact) -> StoreResult<Contact>;

    /// Write exactly the supplied fields and return the post-update record,
    /// or `None` if the id matches nothing.
    async fn update_by_id(&self, id: Uuid, patch: ContactPatch) -> StoreResult<Option<Contact>>;

    /// Remove a contact. Returns whether a record was actually removed.
    async fn delete_by_id(&self, id: Uuid) -> StoreResult<bool>;
}
