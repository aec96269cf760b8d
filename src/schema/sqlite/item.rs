//! Contains an [`ItemAdapter`] implementation for SQLite.

use sqlx::SqlitePool;

use crate::schema::{Id, Item, ItemAdapter};

/// Implements [`ItemAdapter`] over the `items` table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SqliteItem;

#[async_trait::async_trait]
impl ItemAdapter for SqliteItem
{
	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn create(pool: &SqlitePool, name: String, price: f64) -> sqlx::Result<Item>
	{
		let id = sqlx::query_scalar("INSERT INTO items (name, price) VALUES ($1, $2) RETURNING id;")
			.bind(&name)
			.bind(price)
			.fetch_one(pool)
			.await?;

		Ok(Item { id, name, price })
	}

	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn delete(pool: &SqlitePool, id: Id) -> sqlx::Result<()>
	{
		sqlx::query("DELETE FROM items WHERE id = $1;").bind(id).execute(pool).await?;
		Ok(())
	}

	async fn retrieve(pool: &SqlitePool) -> sqlx::Result<Vec<Item>>
	{
		sqlx::query_as("SELECT id, name, price FROM items;").fetch_all(pool).await
	}

	async fn retrieve_by_id(pool: &SqlitePool, id: Id) -> sqlx::Result<Option<Item>>
	{
		sqlx::query_as("SELECT id, name, price FROM items WHERE id = $1;").bind(id).fetch_optional(pool).await
	}

	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn update(pool: &SqlitePool, item: &Item) -> sqlx::Result<()>
	{
		sqlx::query("UPDATE items SET name = $1, price = $2 WHERE id = $3;")
			.bind(&item.name)
			.bind(item.price)
			.bind(item.id)
			.execute(pool)
			.await?;

		Ok(())
	}
}
