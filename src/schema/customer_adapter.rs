//! Contains the operations every [`Customer`] adapter must support.

use sqlx::SqlitePool;

use super::{Customer, Id};

/// Implementors of this trait are capable of storing and retrieving [`Customer`]s.
#[async_trait::async_trait]
pub trait CustomerAdapter
{
	/// Store a new [`Customer`] and return it with its assigned [`Id`].
	async fn create(pool: &SqlitePool, name: String, email: String, phone: String) -> sqlx::Result<Customer>;

	/// Remove the [`Customer`] with the given `id`.
	async fn delete(pool: &SqlitePool, id: Id) -> sqlx::Result<()>;

	/// Get every stored [`Customer`]. No ordering is guaranteed.
	async fn retrieve(pool: &SqlitePool) -> sqlx::Result<Vec<Customer>>;

	/// Get the [`Customer`] with the given `id`, if one exists.
	async fn retrieve_by_id(pool: &SqlitePool, id: Id) -> sqlx::Result<Option<Customer>>;

	/// Persist every field of `customer` over its stored row.
	async fn update(pool: &SqlitePool, customer: &Customer) -> sqlx::Result<()>;
}
