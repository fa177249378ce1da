//! # Contact Handlers
//!
//! The five CRUD handlers and their route table. Each handler is a thin
//! translation layer: request → storage gateway call → status and body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::model::{Contact, ContactPatch, NewContact};
use crate::store::ContactStore;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

/// Shared handler state: the store connection, established once at startup
/// and reused by every request.
#[derive(Clone)]
pub struct ContactsState {
    store: Arc<dyn ContactStore>,
}

impl ContactsState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

/// Build the contact routes (mounted under `/api`).
pub fn contact_routes(state: ContactsState) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/{id}", get(get_contact))
        .route("/create-contact", post(create_contact))
        .route("/update-contact/{id}", put(update_contact))
        .route("/delete-contact/{id}", delete(delete_contact))
        .with_state(state)
}

/// An id that is not a uuid cannot name any record.
fn parse_contact_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

/// List all contacts
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "Every contact in the store", body = [Contact]),
        (status = 500, description = "Storage failure", body = MessageResponse),
    )
)]
pub async fn list_contacts(State(state): State<ContactsState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state.store.find_all().await?;
    Ok(Json(contacts))
}

/// Get a single contact by id
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(
        ("id" = String, Path, description = "Unique id of the contact"),
    ),
    responses(
        (status = 200, description = "The requested contact", body = Contact),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse),
    )
)]
pub async fn get_contact(
    State(state): State<ContactsState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let id = parse_contact_id(&id)?;

    let contact = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(contact))
}

/// Create a new contact
#[utoipa::path(
    post,
    path = "/api/create-contact",
    tag = "contacts",
    request_body = NewContact,
    responses(
        (status = 201, description = "The created contact with its assigned id", body = Contact),
        (status = 400, description = "The store rejected the supplied values", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse),
    )
)]
pub async fn create_contact(
    State(state): State<ContactsState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let Json(fields) = payload.map_err(|e| ApiError::Invalid(e.body_text()))?;

    let contact = state.store.insert(fields).await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// Update a contact, writing exactly the supplied fields
#[utoipa::path(
    put,
    path = "/api/update-contact/{id}",
    tag = "contacts",
    params(
        ("id" = String, Path, description = "Unique id of the contact"),
    ),
    request_body = ContactPatch,
    responses(
        (status = 200, description = "The post-update contact", body = Contact),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse),
    )
)]
pub async fn update_contact(
    State(state): State<ContactsState>,
    Path(id): Path<String>,
    payload: Result<Json<ContactPatch>, JsonRejection>,
) -> ApiResult<Json<Contact>> {
    let id = parse_contact_id(&id)?;
    let Json(patch) = payload.map_err(|e| ApiError::Invalid(e.body_text()))?;

    let contact = state
        .store
        .update_by_id(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(contact))
}

/// Delete a contact by id
#[utoipa::path(
    delete,
    path = "/api/delete-contact/{id}",
    tag = "contacts",
    params(
        ("id" = String, Path, description = "Unique id of the contact"),
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse),
    )
)]
pub async fn delete_contact(
    State(state): State<ContactsState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_contact_id(&id)?;

    if state.store.delete_by_id(id).await? {
        Ok(Json(MessageResponse::contact_deleted()))
    } else {
        Err(ApiError::NotFound)
    }
}
