//! Contains the definition for what an [`Invoice`] row in the database is.

use serde::{Deserialize, Serialize};

use super::Id;

/// Corresponds to the `invoices` table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
pub struct Invoice
{
	/// The [`Id`] of the [`Customer`](super::Customer) being billed.
	pub customer_id: Id,

	/// The [`Id`] of the [`Invoice`].
	pub id: Id,

	/// The persisted total: the sum of `price × quantity` over the invoice's current
	/// [lines](super::InvoiceLine), evaluated against each line's snapshotted price.
	pub total: f64,
}

/// One row of the invoice listing: an [`Invoice`] denormalized with the name of its
/// [`Customer`](super::Customer).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary
{
	/// The name of the billed [`Customer`](super::Customer), or [`None`] when that customer has
	/// since been deleted.
	pub customer_name: Option<String>,

	/// The [`Id`] of the [`Invoice`].
	pub id: Id,

	/// See [`Invoice::total`].
	pub total: f64,
}
