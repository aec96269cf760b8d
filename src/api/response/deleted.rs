//! Contains the acknowledgement issued after a record is deleted.

use serde::{Deserialize, Serialize};

/// The response to a successful `DELETE` request.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Deleted
{
	/// A human-readable acknowledgement, e.g. `"Customer deleted"`.
	message: String,
}

impl Deleted
{
	/// A human-readable acknowledgement.
	pub fn message(&self) -> &str
	{
		self.message.as_ref()
	}

	/// Create a new [`Deleted`] acknowledgement for the given kind of record.
	pub fn new(entity: &str) -> Self
	{
		Self { message: format!("{entity} deleted") }
	}
}
