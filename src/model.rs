//! Contact record schema.
//!
//! `Contact` is the stored shape; `NewContact` and `ContactPatch` are the
//! request payloads for create and update. Payload fields are all optional,
//! so an absent key is distinguishable from an empty value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier, immutable once created.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Joe")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "joe@test.com")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Red")]
    pub favorite_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2002-01-26")]
    pub birthday: Option<NaiveDate>,
}

/// Fields for a new contact. No field is required; the store assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    #[schema(example = "Joe")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "joe@test.com")]
    pub email: Option<String>,
    #[schema(example = "Red")]
    pub favorite_color: Option<String>,
    #[schema(example = "2002-01-26")]
    pub birthday: Option<NaiveDate>,
}

impl NewContact {
    /// Build the stored record once the store has assigned an id.
    pub fn into_contact(self, id: Uuid) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            favorite_color: self.favorite_color,
            birthday: self.birthday,
        }
    }
}

/// Partial update for a contact. Only supplied keys are written; absent keys
/// leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[schema(example = "Joe")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "joe@test.com")]
    pub email: Option<String>,
    #[schema(example = "Blue")]
    pub favorite_color: Option<String>,
    #[schema(example = "2002-01-26")]
    pub birthday: Option<NaiveDate>,
}

impl ContactPatch {
    /// Merge the supplied fields into an existing record.
    pub fn apply(&self, contact: &mut Contact) {
        if let Some(first_name) = &self.first_name {
            contact.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            contact.last_name = Some(last_name.clone());
        }
        if let Some(email) = &self.email {
            contact.email = Some(email.clone());
        }
        if let Some(favorite_color) = &self.favorite_color {
            contact.favorite_color = Some(favorite_color.clone());
        }
        if let Some(birthday) = self.birthday {
            contact.birthday = Some(birthday);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact {
            id: Uuid::new_v4(),
            first_name: Some("Joe".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("joe@test.com".to_string()),
            favorite_color: Some("Red".to_string()),
            birthday: NaiveDate::from_ymd_opt(2002, 1, 26),
        }
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = sample_contact();
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(json["firstName"], "Joe");
        assert_eq!(json["favoriteColor"], "Red");
        assert_eq!(json["birthday"], "2002-01-26");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_contact_omits_absent_fields() {
        let contact = Contact {
            id: Uuid::new_v4(),
            first_name: None,
            last_name: None,
            email: None,
            favorite_color: None,
            birthday: None,
        };

        let json = serde_json::to_value(&contact).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id".to_string()]);
    }

    #[test]
    fn test_patch_deserializes_missing_keys_as_absent() {
        let patch: ContactPatch = serde_json::from_str(r#"{"favoriteColor":"Blue"}"#).unwrap();

        assert_eq!(patch.favorite_color.as_deref(), Some("Blue"));
        assert!(patch.first_name.is_none());
        assert!(patch.birthday.is_none());
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut contact = sample_contact();
        let patch = ContactPatch {
            favorite_color: Some("Blue".to_string()),
            ..Default::default()
        };

        patch.apply(&mut contact);

        assert_eq!(contact.favorite_color.as_deref(), Some("Blue"));
        assert_eq!(contact.first_name.as_deref(), Some("Joe"));
        assert_eq!(contact.email.as_deref(), Some("joe@test.com"));
        assert_eq!(contact.birthday, NaiveDate::from_ymd_opt(2002, 1, 26));
    }

    #[test]
    fn test_patch_apply_is_idempotent() {
        let mut contact = sample_contact();
        let patch = ContactPatch {
            favorite_color: Some("Blue".to_string()),
            ..Default::default()
        };

        patch.apply(&mut contact);
        let after_first = contact.clone();
        patch.apply(&mut contact);

        assert_eq!(contact, after_first);
    }
}
