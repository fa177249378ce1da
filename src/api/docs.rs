//! # API Documentation
//!
//! OpenAPI description generated from the route and schema annotations.
//! Served as a browsable viewer at `/api/docs` and as a raw document at
//! `/api/docs.json`; the `openapi` CLI command prints the same document.

use utoipa::OpenApi;

use crate::model::{Contact, ContactPatch, NewContact};

use super::contacts;
use super::response::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "This API handles CRUD operations for a contact list, \
                       allowing users to create, read, update, and delete \
                       contact information."
    ),
    paths(
        contacts::list_contacts,
        contacts::get_contact,
        contacts::create_contact,
        contacts::update_contact,
        contacts::delete_contact,
    ),
    components(schemas(Contact, NewContact, ContactPatch, MessageResponse)),
    tags(
        (name = "contacts", description = "Contact list operations")
    )
)]
pub struct ApiDoc;

/// The API description as pretty-printed JSON.
pub fn openapi_json() -> serde_json::Result<String> {
    ApiDoc::openapi().to_pretty_json()
}
