//! Contains an [`InvoiceAdapter`] implementation for SQLite.

use sqlx::{SqliteConnection, SqlitePool};

use crate::schema::{Id, Invoice, InvoiceAdapter, InvoiceLine, InvoiceLineDetail, InvoiceSummary};

/// Implements [`InvoiceAdapter`] over the `invoices` and `invoice_lines` tables.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SqliteInvoice;

/// Insert `lines` for the invoice `invoice_id`, snapshotting each item's current price into its
/// new row. Returns the accumulated total and the ids of requested items which do not exist
/// (their lines are skipped).
async fn insert_lines(
	connection: &mut SqliteConnection,
	invoice_id: Id,
	lines: &[(Id, f64)],
) -> sqlx::Result<(f64, Vec<Id>)>
{
	let mut skipped = Vec::new();
	let mut total = 0.;

	for &(item_id, quantity) in lines
	{
		let price: Option<f64> = sqlx::query_scalar("SELECT price FROM items WHERE id = $1;")
			.bind(item_id)
			.fetch_optional(&mut *connection)
			.await?;

		match price
		{
			Some(price) =>
			{
				sqlx::query(
					"INSERT INTO invoice_lines (invoice_id, item_id, price, quantity) VALUES ($1, $2, $3, $4);",
				)
				.bind(invoice_id)
				.bind(item_id)
				.bind(price)
				.bind(quantity)
				.execute(&mut *connection)
				.await?;

				total += price * quantity;
			},
			None => skipped.push(item_id),
		}
	}

	Ok((total, skipped))
}

#[async_trait::async_trait]
impl InvoiceAdapter for SqliteInvoice
{
	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn create(pool: &SqlitePool, customer_id: Id, lines: &[(Id, f64)]) -> sqlx::Result<(Invoice, Vec<Id>)>
	{
		let mut tx = pool.begin().await?;

		let id: Id = sqlx::query_scalar("INSERT INTO invoices (customer_id, total) VALUES ($1, 0) RETURNING id;")
			.bind(customer_id)
			.fetch_one(&mut *tx)
			.await?;

		let (total, skipped) = insert_lines(&mut tx, id, lines).await?;
		sqlx::query("UPDATE invoices SET total = $1 WHERE id = $2;")
			.bind(total)
			.bind(id)
			.execute(&mut *tx)
			.await?;

		tx.commit().await?;
		Ok((Invoice { customer_id, id, total }, skipped))
	}

	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn delete(pool: &SqlitePool, id: Id) -> sqlx::Result<()>
	{
		let mut tx = pool.begin().await?;
		sqlx::query("DELETE FROM invoice_lines WHERE invoice_id = $1;").bind(id).execute(&mut *tx).await?;
		sqlx::query("DELETE FROM invoices WHERE id = $1;").bind(id).execute(&mut *tx).await?;
		tx.commit().await
	}

	async fn line_details(pool: &SqlitePool, invoice_id: Id) -> sqlx::Result<Vec<InvoiceLineDetail>>
	{
		sqlx::query_as(
			"SELECT items.name AS item_name, invoice_lines.price, invoice_lines.quantity
			FROM invoice_lines
			JOIN items ON items.id = invoice_lines.item_id
			WHERE invoice_lines.invoice_id = $1;",
		)
		.bind(invoice_id)
		.fetch_all(pool)
		.await
	}

	async fn lines(pool: &SqlitePool, invoice_id: Id) -> sqlx::Result<Vec<InvoiceLine>>
	{
		sqlx::query_as("SELECT id, invoice_id, item_id, price, quantity FROM invoice_lines WHERE invoice_id = $1;")
			.bind(invoice_id)
			.fetch_all(pool)
			.await
	}

	async fn retrieve(pool: &SqlitePool) -> sqlx::Result<Vec<InvoiceSummary>>
	{
		sqlx::query_as(
			"SELECT invoices.id, customers.name AS customer_name, invoices.total
			FROM invoices
			LEFT JOIN customers ON customers.id = invoices.customer_id;",
		)
		.fetch_all(pool)
		.await
	}

	async fn retrieve_by_id(pool: &SqlitePool, id: Id) -> sqlx::Result<Option<Invoice>>
	{
		sqlx::query_as("SELECT customer_id, id, total FROM invoices WHERE id = $1;")
			.bind(id)
			.fetch_optional(pool)
			.await
	}

	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn update(pool: &SqlitePool, invoice: &Invoice, lines: Option<&[(Id, f64)]>) -> sqlx::Result<Vec<Id>>
	{
		let mut tx = pool.begin().await?;

		sqlx::query("UPDATE invoices SET customer_id = $1 WHERE id = $2;")
			.bind(invoice.customer_id)
			.bind(invoice.id)
			.execute(&mut *tx)
			.await?;

		let skipped = match lines
		{
			Some(lines) =>
			{
				sqlx::query("DELETE FROM invoice_lines WHERE invoice_id = $1;")
					.bind(invoice.id)
					.execute(&mut *tx)
					.await?;

				let (total, skipped) = insert_lines(&mut tx, invoice.id, lines).await?;
				sqlx::query("UPDATE invoices SET total = $1 WHERE id = $2;")
					.bind(total)
					.bind(invoice.id)
					.execute(&mut *tx)
					.await?;

				skipped
			},
			None => Vec::new(),
		};

		tx.commit().await?;
		Ok(skipped)
	}
}
