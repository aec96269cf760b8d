//! Contains a [`UserAdapter`] implementation for SQLite.

use sqlx::SqlitePool;

use crate::schema::{User, UserAdapter};

/// Implements [`UserAdapter`] over the `users` table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SqliteUser;

#[async_trait::async_trait]
impl UserAdapter for SqliteUser
{
	#[tracing::instrument(level = "trace", skip_all, err)]
	async fn create(pool: &SqlitePool, username: String, password: String) -> sqlx::Result<User>
	{
		let id = sqlx::query_scalar("INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id;")
			.bind(&username)
			.bind(&password)
			.fetch_one(pool)
			.await?;

		Ok(User::new(id, password, username))
	}

	async fn retrieve_by_username(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<User>>
	{
		sqlx::query_as("SELECT id, password, username FROM users WHERE username = $1;")
			.bind(username)
			.fetch_optional(pool)
			.await
	}
}
