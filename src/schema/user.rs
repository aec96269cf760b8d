//! Contains the definition for what a [`User`] row in the database is.

use std::sync::OnceLock;

use argon2::{
	password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
	Argon2,
};
use serde::{Serialize, Serializer};

use super::Id;

static ARGON: OnceLock<Argon2> = OnceLock::new();

/// Corresponds to the `users` table.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
pub struct User
{
	/// The [`Id`] of the [`User`].
	id: Id,

	/// The [hashed](argon2) password.
	#[serde(serialize_with = "serialize_password")]
	password: String,

	/// The [`User`]'s unique username.
	username: String,
}

/// A custom serializer for the [`User`] password which prevents the stored hash from ever
/// leaving the server.
fn serialize_password<S>(_: &str, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str("")
}

impl User
{
	/// Hash a plaintext `password` for storage, generating a fresh salt.
	pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error>
	{
		let argon = ARGON.get_or_init(Argon2::default);
		let salt = SaltString::generate(&mut OsRng);
		argon.hash_password(password.as_bytes(), &salt).map(|hash| hash.to_string())
	}

	/// The [`Id`] of the [`User`].
	pub const fn id(&self) -> Id
	{
		self.id
	}

	/// Create a new [`User`]. The `password` must already be [hashed](User::hash).
	pub const fn new(id: Id, password: String, username: String) -> Self
	{
		Self { id, password, username }
	}

	/// Get the [`User`]'s [`argon2`]-hashed password.
	pub fn password(&self) -> &str
	{
		self.password.as_ref()
	}

	/// Get the [`User`]'s username.
	pub fn username(&self) -> &str
	{
		self.username.as_ref()
	}
}

#[cfg(test)]
mod tests
{
	use argon2::{Argon2, PasswordHash, PasswordVerifier};
	use pretty_assertions::assert_ne;

	use super::User;

	#[test]
	fn hash()
	{
		let password = mockd::password::generate(true, true, true, 12);
		let hash = User::hash(&password).unwrap();
		assert_ne!(hash, password);

		let parsed = PasswordHash::new(&hash).unwrap();
		assert!(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok());
		assert!(Argon2::default().verify_password(b"not the password", &parsed).is_err());
	}
}
