//! Contains the definitions of the rows stored in the database, the [adapter](Adapter) traits
//! which operate on them, and the [SQLite](sqlite) implementations of those traits.

mod adapter;
mod customer;
mod customer_adapter;
mod invoice;
mod invoice_adapter;
mod invoice_line;
mod item;
mod item_adapter;
pub mod sqlite;
mod user;
mod user_adapter;

pub use adapter::Adapter;
pub use customer::Customer;
pub use customer_adapter::CustomerAdapter;
pub use invoice::{Invoice, InvoiceSummary};
pub use invoice_adapter::InvoiceAdapter;
pub use invoice_line::{InvoiceLine, InvoiceLineDetail};
pub use item::Item;
pub use item_adapter::ItemAdapter;
pub use user::User;
pub use user_adapter::UserAdapter;

/// The type of the primary key of every table.
pub type Id = i64;
