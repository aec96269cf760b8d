//! Contains the responses of the invoice composition endpoints.

use serde::{Deserialize, Serialize};

use crate::schema::Id;

/// The response of [`routes::INVOICES`](crate::api::routes::INVOICES) after an invoice was
/// composed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
pub struct InvoiceCreated
{
	/// The [`Id`] of the new [`Invoice`](crate::schema::Invoice).
	id: Id,

	/// The persisted total: the sum of `price × quantity` over every accepted line.
	total: f64,

	/// One warning per requested line which named an unknown item and was skipped.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	warnings: Vec<String>,
}

impl InvoiceCreated
{
	/// The [`Id`] of the new [`Invoice`](crate::schema::Invoice).
	pub const fn id(&self) -> Id
	{
		self.id
	}

	/// Create a new [`InvoiceCreated`], generating one warning per skipped item id.
	pub fn new(id: Id, total: f64, skipped: Vec<Id>) -> Self
	{
		Self { id, total, warnings: warnings(skipped) }
	}

	/// The persisted total of the new invoice.
	pub const fn total(&self) -> f64
	{
		self.total
	}

	/// One warning per requested line which named an unknown item and was skipped.
	pub fn warnings(&self) -> &[String]
	{
		&self.warnings
	}
}

/// The response of [`routes::INVOICE`](crate::api::routes::INVOICE) after an invoice was
/// updated.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct InvoiceUpdated
{
	/// The [`Id`] of the [`Invoice`](crate::schema::Invoice) which was updated.
	id: Id,

	/// A human-readable acknowledgement.
	message: String,

	/// One warning per replacement line which named an unknown item and was skipped.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	warnings: Vec<String>,
}

impl InvoiceUpdated
{
	/// The [`Id`] of the [`Invoice`](crate::schema::Invoice) which was updated.
	pub const fn id(&self) -> Id
	{
		self.id
	}

	/// A human-readable acknowledgement.
	pub fn message(&self) -> &str
	{
		self.message.as_ref()
	}

	/// Create a new [`InvoiceUpdated`], generating one warning per skipped item id.
	pub fn new(id: Id, skipped: Vec<Id>) -> Self
	{
		Self { id, message: "Invoice updated".into(), warnings: warnings(skipped) }
	}

	/// One warning per replacement line which named an unknown item and was skipped.
	pub fn warnings(&self) -> &[String]
	{
		&self.warnings
	}
}

/// Render each skipped item id as a warning a caller can act on.
fn warnings(skipped: Vec<Id>) -> Vec<String>
{
	skipped.into_iter().map(|id| format!("Item {id} not found; line skipped")).collect()
}
