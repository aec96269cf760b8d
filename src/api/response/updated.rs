//! Contains the acknowledgement issued after a record is updated.

use serde::{Deserialize, Serialize};

use crate::schema::Id;

/// The response to a successful `PUT` request.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Updated
{
	/// The [`Id`] of the record which was updated.
	id: Id,

	/// A human-readable acknowledgement, e.g. `"Customer updated"`.
	message: String,
}

impl Updated
{
	/// The [`Id`] of the record which was updated.
	pub const fn id(&self) -> Id
	{
		self.id
	}

	/// A human-readable acknowledgement.
	pub fn message(&self) -> &str
	{
		self.message.as_ref()
	}

	/// Create a new [`Updated`] acknowledgement for the given kind of record.
	pub fn new(entity: &str, id: Id) -> Self
	{
		Self { id, message: format!("{entity} updated") }
	}
}
