//! Contains the request bodies which are accepted by the [server](crate::server).
//!
//! Required fields are modeled as [`Option`]s so that their absence surfaces as a validation
//! error rather than a deserialization failure.

mod auth;
mod customer;
mod invoice;
mod item;

pub use auth::Credentials;
pub use customer::{CreateCustomer, UpdateCustomer};
pub use invoice::{CreateInvoice, Line, UpdateInvoice};
pub use item::{CreateItem, UpdateItem};
