//! Contains the [`Adapter`] trait, which binds together the per-table adapters of one database
//! backend.

use sqlx::SqlitePool;

use super::{CustomerAdapter, InvoiceAdapter, ItemAdapter, UserAdapter};

/// One database backend: a set of per-table adapters plus the migration pass which creates the
/// tables they operate on.
#[async_trait::async_trait]
pub trait Adapter: Send + Sync + 'static
{
	/// The adapter for [`Customer`](super::Customer)s.
	type Customer: CustomerAdapter;

	/// The adapter for [`Invoice`](super::Invoice)s.
	type Invoice: InvoiceAdapter;

	/// The adapter for [`Item`](super::Item)s.
	type Item: ItemAdapter;

	/// The adapter for [`User`](super::User)s.
	type User: UserAdapter;

	/// Create every table this backend operates on, if it does not exist yet.
	async fn init(pool: &SqlitePool) -> sqlx::Result<()>;
}
