//! Contains the responses of the `/auth` endpoints.

use serde::{Deserialize, Serialize};

use crate::schema::Id;

/// The response of [`routes::LOGIN`](crate::api::routes::LOGIN) when a session was established.
/// The session token itself travels in a cookie, not in this body.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedIn
{
	/// A human-readable acknowledgement.
	message: String,

	/// The [`Id`] of the [`User`](crate::schema::User) the session is bound to.
	user_id: Id,
}

impl LoggedIn
{
	/// A human-readable acknowledgement.
	pub fn message(&self) -> &str
	{
		self.message.as_ref()
	}

	/// Create a new [`LoggedIn`].
	pub fn new(user_id: Id) -> Self
	{
		Self { message: "Login successful".into(), user_id }
	}

	/// The [`Id`] of the [`User`](crate::schema::User) the session is bound to.
	pub const fn user_id(&self) -> Id
	{
		self.user_id
	}
}

/// The response of [`routes::LOGOUT`](crate::api::routes::LOGOUT).
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct LoggedOut
{
	/// A human-readable acknowledgement.
	message: String,
}

impl LoggedOut
{
	/// A human-readable acknowledgement.
	pub fn message(&self) -> &str
	{
		self.message.as_ref()
	}

	/// Create a new [`LoggedOut`].
	pub fn new() -> Self
	{
		Self { message: "Logged out successfully".into() }
	}
}

impl Default for LoggedOut
{
	fn default() -> Self
	{
		Self::new()
	}
}

/// The response of [`routes::PROFILE`](crate::api::routes::PROFILE): the identity bound to the
/// active session.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile
{
	/// The [`Id`] of the logged-in [`User`](crate::schema::User).
	user_id: Id,

	/// The username of the logged-in [`User`](crate::schema::User).
	username: String,
}

impl Profile
{
	/// Create a new [`Profile`].
	pub const fn new(user_id: Id, username: String) -> Self
	{
		Self { user_id, username }
	}

	/// The [`Id`] of the logged-in [`User`](crate::schema::User).
	pub const fn user_id(&self) -> Id
	{
		self.user_id
	}

	/// The username of the logged-in [`User`](crate::schema::User).
	pub fn username(&self) -> &str
	{
		self.username.as_ref()
	}
}

/// The response of [`routes::REGISTER`](crate::api::routes::REGISTER) when a new
/// [`User`](crate::schema::User) was stored.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registered
{
	/// A human-readable acknowledgement.
	message: String,

	/// The [`Id`] of the newly-registered [`User`](crate::schema::User).
	user_id: Id,
}

impl Registered
{
	/// A human-readable acknowledgement.
	pub fn message(&self) -> &str
	{
		self.message.as_ref()
	}

	/// Create a new [`Registered`].
	pub fn new(user_id: Id) -> Self
	{
		Self { message: "User registered successfully".into(), user_id }
	}

	/// The [`Id`] of the newly-registered [`User`](crate::schema::User).
	pub const fn user_id(&self) -> Id
	{
		self.user_id
	}
}
