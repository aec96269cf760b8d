//! Contains the definition for what an [`Item`] row in the database is.

use serde::{Deserialize, Serialize};

use super::Id;

/// Corresponds to the `items` table: one kind of billable good or service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
pub struct Item
{
	/// The [`Id`] of the [`Item`].
	pub id: Id,

	/// The name of the [`Item`].
	pub name: String,

	/// The current price of one unit of the [`Item`]. Expected to be non-negative.
	///
	/// Changing it never affects existing invoices, which bill against the price snapshotted
	/// into each of their [lines](super::InvoiceLine) instead.
	pub price: f64,
}
