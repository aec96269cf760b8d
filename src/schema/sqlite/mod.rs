//! Contains the SQLite implementations of the [`schema`](super) adapters.

mod customer;
mod invoice;
mod item;
mod user;

pub use customer::SqliteCustomer;
pub use invoice::SqliteInvoice;
pub use item::SqliteItem;
use sqlx::SqlitePool;
pub use user::SqliteUser;

use super::Adapter;

/// The SQLite database backend.
///
/// [`init`](Adapter::init) is the single authoritative migration pass: every table the adapters
/// below operate on is created here, and nowhere else.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SqliteSchema;

#[async_trait::async_trait]
impl Adapter for SqliteSchema
{
	type Customer = SqliteCustomer;
	type Invoice = SqliteInvoice;
	type Item = SqliteItem;
	type User = SqliteUser;

	async fn init(pool: &SqlitePool) -> sqlx::Result<()>
	{
		sqlx::query(
			"CREATE TABLE IF NOT EXISTS users
			(
				id INTEGER PRIMARY KEY AUTOINCREMENT,
				password TEXT NOT NULL,
				username TEXT NOT NULL,

				CONSTRAINT users__username_uq UNIQUE (username)
			);",
		)
		.execute(pool)
		.await?;

		sqlx::query(
			"CREATE TABLE IF NOT EXISTS customers
			(
				id INTEGER PRIMARY KEY AUTOINCREMENT,
				email TEXT NOT NULL,
				name TEXT NOT NULL,
				phone TEXT NOT NULL
			);",
		)
		.execute(pool)
		.await?;

		sqlx::query(
			"CREATE TABLE IF NOT EXISTS items
			(
				id INTEGER PRIMARY KEY AUTOINCREMENT,
				name TEXT NOT NULL,
				price REAL NOT NULL
			);",
		)
		.execute(pool)
		.await?;

		sqlx::query(
			"CREATE TABLE IF NOT EXISTS invoices
			(
				id INTEGER PRIMARY KEY AUTOINCREMENT,
				customer_id INTEGER NOT NULL REFERENCES customers(id),
				total REAL NOT NULL DEFAULT 0
			);",
		)
		.execute(pool)
		.await?;

		sqlx::query(
			"CREATE TABLE IF NOT EXISTS invoice_lines
			(
				id INTEGER PRIMARY KEY AUTOINCREMENT,
				invoice_id INTEGER NOT NULL REFERENCES invoices(id),
				item_id INTEGER NOT NULL REFERENCES items(id),
				price REAL NOT NULL,
				quantity REAL NOT NULL
			);",
		)
		.execute(pool)
		.await?;

		Ok(())
	}
}
