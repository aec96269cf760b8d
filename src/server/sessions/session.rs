//! Contains data regarding what is stored when a user logs in.

use time::OffsetDateTime;

use crate::schema::Id;

/// Represents a user who has successfully logged in, and may *stay* logged in until expiry.
#[derive(Clone, Debug)]
pub struct Session
{
	/// The moment this session stops being valid.
	pub(in crate::server) expires: OffsetDateTime,

	/// The [`Id`] of the user who has logged in.
	pub(in crate::server) user_id: Id,

	/// The username of the user who has logged in.
	pub(in crate::server) username: String,
}
