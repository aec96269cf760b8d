//! Contains the credentials sent to [`routes::REGISTER`](crate::api::routes::REGISTER) and
//! [`routes::LOGIN`](crate::api::routes::LOGIN).

use serde::{Deserialize, Serialize};

/// A username and password, as sent by a client. Both fields are required; see
/// [`into_fields`](Credentials::into_fields).
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Credentials
{
	/// The plaintext password. It is hashed before it is stored, and never serialized back.
	password: Option<String>,

	/// The unique name which identifies the [`User`](crate::schema::User).
	username: Option<String>,
}

impl Credentials
{
	/// Unpack the `(username, password)` pair, or [`None`] if either field was absent.
	pub fn into_fields(self) -> Option<(String, String)>
	{
		Some((self.username?, self.password?))
	}

	/// Create a new [`Credentials`].
	pub const fn new(username: String, password: String) -> Self
	{
		Self { password: Some(password), username: Some(username) }
	}
}
