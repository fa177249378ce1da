//! # Contacts API HTTP Module
//!
//! Routes, handlers, error mapping, and the generated API documentation.

pub mod contacts;
pub mod docs;
pub mod errors;
pub mod response;
pub mod server;

pub use contacts::{contact_routes, ContactsState};
pub use docs::ApiDoc;
pub use errors::{ApiError, ApiResult};
pub use response::MessageResponse;
pub use server::ApiServer;
