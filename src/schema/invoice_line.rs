//! Contains the definition for what an [`InvoiceLine`] row in the database is.

use serde::{Deserialize, Serialize};

use super::Id;

/// Corresponds to the `invoice_lines` table: a join record binding one
/// [`Invoice`](super::Invoice) to one [`Item`](super::Item) with a quantity.
///
/// Lines belong exclusively to their invoice. Deleting an invoice or replacing its item list
/// deletes all of its lines first, so no row here can outlive its invoice.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
pub struct InvoiceLine
{
	/// The [`Id`] of the [`InvoiceLine`].
	pub id: Id,

	/// The [`Id`] of the [`Invoice`](super::Invoice) this line belongs to.
	pub invoice_id: Id,

	/// The [`Id`] of the [`Item`](super::Item) being billed.
	pub item_id: Id,

	/// The unit price of the item, snapshotted at the moment the line was created. The invoice
	/// total and the rendered document both read this value, so a later change to
	/// [`Item::price`](super::Item::price) affects neither.
	pub price: f64,

	/// How many units of the item are billed.
	pub quantity: f64,
}

/// One line of a rendered invoice document: the [`InvoiceLine`] joined with the current name of
/// its [`Item`](super::Item).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
pub struct InvoiceLineDetail
{
	/// The current name of the billed [`Item`](super::Item).
	pub item_name: String,

	/// See [`InvoiceLine::price`].
	pub price: f64,

	/// See [`InvoiceLine::quantity`].
	pub quantity: f64,
}
