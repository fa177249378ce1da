//! In-memory storage gateway.
//!
//! Backs the integration tests and ephemeral serving. Assigns ids the same
//! way the persistent gateway does: inside the store, on insert.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Contact, ContactPatch, NewContact};

use super::errors::{StoreError, StoreResult};
use super::ContactStore;

/// In-memory contact store
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    records: RwLock<Vec<Contact>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(records.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Contact>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, fields: NewContact) -> StoreResult<Contact> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let contact = fields.into_contact(Uuid::new_v4());
        records.push(contact.clone());

        Ok(contact)
    }

    async fn update_by_id(&self, id: Uuid, patch: ContactPatch) -> StoreResult<Option<Contact>> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let Some(contact) = records.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        patch.apply(contact);

        Ok(Some(contact.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let Some(idx) = records.iter().position(|c| c.id == id) else {
            return Ok(false);
        };

        records.remove(idx);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joe() -> NewContact {
        NewContact {
            first_name: Some("Joe".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("joe@test.com".to_string()),
            favorite_color: Some("Red".to_string()),
            birthday: chrono::NaiveDate::from_ymd_opt(2002, 1, 26),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_lists() {
        let store = MemoryContactStore::new();

        let created = store.insert(joe()).await.unwrap();
        assert!(!created.id.is_nil());

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryContactStore::new();
        let created = store.insert(joe()).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.find_by_id(Uuid::new_v4()).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_update_patches_supplied_fields_only() {
        let store = MemoryContactStore::new();
        let created = store.insert(joe()).await.unwrap();

        let patch = ContactPatch {
            favorite_color: Some("Blue".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_id(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.favorite_color.as_deref(), Some("Blue"));
        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.birthday, created.birthday);
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_none() {
        let store = MemoryContactStore::new();

        let result = store
            .update_by_id(Uuid::new_v4(), ContactPatch::default())
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let store = MemoryContactStore::new();
        let created = store.insert(joe()).await.unwrap();

        assert!(store.delete_by_id(created.id).await.unwrap());
        assert!(!store.delete_by_id(created.id).await.unwrap());
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
