//! Contains the operations every [`User`] adapter must support.

use sqlx::SqlitePool;

use super::User;

/// Implementors of this trait are capable of storing and retrieving [`User`]s.
#[async_trait::async_trait]
pub trait UserAdapter
{
	/// Store a new [`User`] and return it with its assigned [`Id`](super::Id).
	///
	/// The `password` must already be [hashed](User::hash).
	async fn create(pool: &SqlitePool, username: String, password: String) -> sqlx::Result<User>;

	/// Get the [`User`] with the given `username`, if one exists.
	async fn retrieve_by_username(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<User>>;
}
