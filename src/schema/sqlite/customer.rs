//! Contains a [`CustomerAdapter`] implementation for SQLite.

use sqlx::SqlitePool;

use crate::schema::{Customer, CustomerAdapter, Id};

/// Implements [`CustomerAdapter`] over the `customers` table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SqliteCustomer;

#[async_trait::async_trait]
impl CustomerAdapter for SqliteCustomer
{
	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn create(pool: &SqlitePool, name: String, email: String, phone: String) -> sqlx::Result<Customer>
	{
		let id = sqlx::query_scalar("INSERT INTO customers (name, email, phone) VALUES ($1, $2, $3) RETURNING id;")
			.bind(&name)
			.bind(&email)
			.bind(&phone)
			.fetch_one(pool)
			.await?;

		Ok(Customer { email, id, name, phone })
	}

	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn delete(pool: &SqlitePool, id: Id) -> sqlx::Result<()>
	{
		sqlx::query("DELETE FROM customers WHERE id = $1;").bind(id).execute(pool).await?;
		Ok(())
	}

	async fn retrieve(pool: &SqlitePool) -> sqlx::Result<Vec<Customer>>
	{
		sqlx::query_as("SELECT id, email, name, phone FROM customers;").fetch_all(pool).await
	}

	async fn retrieve_by_id(pool: &SqlitePool, id: Id) -> sqlx::Result<Option<Customer>>
	{
		sqlx::query_as("SELECT id, email, name, phone FROM customers WHERE id = $1;")
			.bind(id)
			.fetch_optional(pool)
			.await
	}

	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn update(pool: &SqlitePool, customer: &Customer) -> sqlx::Result<()>
	{
		sqlx::query("UPDATE customers SET email = $1, name = $2, phone = $3 WHERE id = $4;")
			.bind(&customer.email)
			.bind(&customer.name)
			.bind(&customer.phone)
			.bind(customer.id)
			.execute(pool)
			.await?;

		Ok(())
	}
}
