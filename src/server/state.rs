//! Contains data and functions for the [`ServerState`] which is shared across requests.

use sqlx::SqlitePool;

use super::sessions::SessionManager;

/// The state which is shared by the server.
#[derive(Clone, Debug)]
pub struct ServerState
{
	/// The [`Pool`](sqlx::Pool) of connections to the database.
	pool: SqlitePool,

	/// The active login [`Session`](super::sessions::Session)s.
	sessions: SessionManager,
}

impl ServerState
{
	/// Create a new [`ServerState`].
	pub const fn new(pool: SqlitePool, sessions: SessionManager) -> Self
	{
		Self { pool, sessions }
	}

	/// Get the [`Pool`](sqlx::Pool) of connections to the database.
	pub const fn pool(&self) -> &SqlitePool
	{
		&self.pool
	}

	/// Get the active login [`Session`](super::sessions::Session)s.
	pub const fn sessions(&self) -> &SessionManager
	{
		&self.sessions
	}
}
