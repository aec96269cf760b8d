//! Contains the request bodies for [`routes::INVOICES`](crate::api::routes::INVOICES) and
//! [`routes::INVOICE`](crate::api::routes::INVOICE).

use serde::{Deserialize, Serialize};

use crate::schema::Id;

/// One requested invoice line: a reference to an [`Item`](crate::schema::Item) and the quantity
/// being billed.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line
{
	/// The [`Id`] of the [`Item`](crate::schema::Item) being billed.
	item_id: Id,

	/// How many units of the item are billed. Expected to be positive, but not validated.
	quantity: f64,
}

impl Line
{
	/// The [`Id`] of the [`Item`](crate::schema::Item) being billed.
	pub const fn item_id(&self) -> Id
	{
		self.item_id
	}

	/// Create a new [`Line`].
	pub const fn new(item_id: Id, quantity: f64) -> Self
	{
		Self { item_id, quantity }
	}

	/// How many units of the item are billed.
	pub const fn quantity(&self) -> f64
	{
		self.quantity
	}
}

/// The request to compose a new [`Invoice`](crate::schema::Invoice) for a customer out of
/// `(item, quantity)` [`Line`]s.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoice
{
	/// The [`Id`] of the [`Customer`](crate::schema::Customer) being billed. Required.
	customer_id: Option<Id>,

	/// The lines to compose the invoice from. May be empty.
	#[serde(default)]
	items: Vec<Line>,
}

impl CreateInvoice
{
	/// The [`Id`] of the [`Customer`](crate::schema::Customer) being billed, if it was provided.
	pub const fn customer_id(&self) -> Option<Id>
	{
		self.customer_id
	}

	/// The lines to compose the invoice from.
	pub fn items(&self) -> &[Line]
	{
		&self.items
	}

	/// Create a new [`CreateInvoice`].
	pub const fn new(customer_id: Id, items: Vec<Line>) -> Self
	{
		Self { customer_id: Some(customer_id), items }
	}
}

/// The request to update an [`Invoice`](crate::schema::Invoice).
///
/// Omitting `customer_id` leaves the invoice assigned to its current customer. Omitting `items`
/// leaves the existing lines and total untouched; providing it (even empty) discards every
/// existing line and recomputes the total from the new list.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoice
{
	/// The [`Id`] of the [`Customer`](crate::schema::Customer) to reassign the invoice to.
	customer_id: Option<Id>,

	/// The lines which should replace the invoice's current lines.
	items: Option<Vec<Line>>,
}

impl UpdateInvoice
{
	/// The [`Id`] of the [`Customer`](crate::schema::Customer) to reassign the invoice to.
	pub const fn customer_id(&self) -> Option<Id>
	{
		self.customer_id
	}

	/// The lines which should replace the invoice's current lines, if any were provided.
	pub fn items(&self) -> Option<&[Line]>
	{
		self.items.as_deref()
	}

	/// Create a new [`UpdateInvoice`].
	pub const fn new(customer_id: Option<Id>, items: Option<Vec<Line>>) -> Self
	{
		Self { customer_id, items }
	}
}
