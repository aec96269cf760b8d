//! Contains the definition for what a [`Customer`] row in the database is.

use serde::{Deserialize, Serialize};

use super::Id;

/// Corresponds to the `customers` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, sqlx::FromRow)]
pub struct Customer
{
	/// The [`Customer`]'s contact email address.
	pub email: String,

	/// The [`Id`] of the [`Customer`].
	pub id: Id,

	/// The name of the [`Customer`].
	pub name: String,

	/// The [`Customer`]'s contact phone number.
	pub phone: String,
}
