//! Contains the response bodies which are issued by the [server](crate::server).
//!
//! Failures of any route share a single shape: a JSON object `{"error": message}` (see
//! [`Error`](crate::server::Error)).

mod auth;
mod deleted;
mod invoice;
mod updated;

pub use auth::{LoggedIn, LoggedOut, Profile, Registered};
pub use deleted::Deleted;
pub use invoice::{InvoiceCreated, InvoiceUpdated};
pub use updated::Updated;
