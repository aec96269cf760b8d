//! Contains the operations every [`Invoice`] adapter must support.

use sqlx::SqlitePool;

use super::{Id, Invoice, InvoiceLine, InvoiceLineDetail, InvoiceSummary};

/// Implementors of this trait are capable of composing, storing, and retrieving [`Invoice`]s
/// together with their [`InvoiceLine`]s.
///
/// The composite operations ([`create`](Self::create), [`update`](Self::update),
/// [`delete`](Self::delete)) must each run in a single transaction, so that an invoice's lines
/// and its persisted total can never be observed out of sync.
#[async_trait::async_trait]
pub trait InvoiceAdapter
{
	/// Compose a new [`Invoice`] for `customer_id` out of `(item id, quantity)` `lines`.
	///
	/// Each line snapshots the item's current price and contributes `price × quantity` to the
	/// persisted total. Lines naming an unknown item are skipped; the skipped ids are returned
	/// alongside the invoice so callers can surface them.
	async fn create(pool: &SqlitePool, customer_id: Id, lines: &[(Id, f64)]) -> sqlx::Result<(Invoice, Vec<Id>)>;

	/// Remove the [`Invoice`] with the given `id`, deleting its [`InvoiceLine`]s first.
	async fn delete(pool: &SqlitePool, id: Id) -> sqlx::Result<()>;

	/// Get each [`InvoiceLine`] of the invoice `invoice_id` joined with its item's current name,
	/// ready for rendering. Lines whose item has since been deleted are omitted.
	async fn line_details(pool: &SqlitePool, invoice_id: Id) -> sqlx::Result<Vec<InvoiceLineDetail>>;

	/// Get every [`InvoiceLine`] belonging to the invoice `invoice_id`.
	async fn lines(pool: &SqlitePool, invoice_id: Id) -> sqlx::Result<Vec<InvoiceLine>>;

	/// Get every stored [`Invoice`], denormalized with its customer's name. No ordering is
	/// guaranteed.
	async fn retrieve(pool: &SqlitePool) -> sqlx::Result<Vec<InvoiceSummary>>;

	/// Get the [`Invoice`] with the given `id`, if one exists.
	async fn retrieve_by_id(pool: &SqlitePool, id: Id) -> sqlx::Result<Option<Invoice>>;

	/// Persist the customer assignment of `invoice` and, when `lines` is [`Some`], discard every
	/// existing line and re-run the composition algorithm against the new list, recomputing the
	/// total from zero. When `lines` is [`None`] the existing lines and total are untouched.
	///
	/// Returns the ids of replacement lines which named an unknown item and were skipped.
	async fn update(pool: &SqlitePool, invoice: &Invoice, lines: Option<&[(Id, f64)]>) -> sqlx::Result<Vec<Id>>;
}
