//! Contains the operations every [`Item`] adapter must support.

use sqlx::SqlitePool;

use super::{Id, Item};

/// Implementors of this trait are capable of storing and retrieving [`Item`]s.
#[async_trait::async_trait]
pub trait ItemAdapter
{
	/// Store a new [`Item`] and return it with its assigned [`Id`].
	async fn create(pool: &SqlitePool, name: String, price: f64) -> sqlx::Result<Item>;

	/// Remove the [`Item`] with the given `id`.
	async fn delete(pool: &SqlitePool, id: Id) -> sqlx::Result<()>;

	/// Get every stored [`Item`]. No ordering is guaranteed.
	async fn retrieve(pool: &SqlitePool) -> sqlx::Result<Vec<Item>>;

	/// Get the [`Item`] with the given `id`, if one exists.
	async fn retrieve_by_id(pool: &SqlitePool, id: Id) -> sqlx::Result<Option<Item>>;

	/// Persist every field of `item` over its stored row.
	async fn update(pool: &SqlitePool, item: &Item) -> sqlx::Result<()>;
}
