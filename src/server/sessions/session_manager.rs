//! Contains code which manages active sessions: log-ins, lookups, and expiry.

use core::time::Duration;
use std::{collections::HashMap, sync::Arc};

use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Session;
use crate::schema::Id;

type SyncUuidMap<T> = Arc<RwLock<HashMap<Uuid, T>>>;

/// A manager for the [`Session`]s of currently logged-in users.
#[derive(Clone, Debug)]
pub struct SessionManager
{
	/// The currently logged in users.
	sessions: SyncUuidMap<Session>,

	/// The amount of time that it takes before an active session expires.
	ttl: Duration,
}

impl SessionManager
{
	/// Store a new [`Session`] bound to the given user, returning the token which identifies it.
	pub async fn login(&self, user_id: Id, username: String) -> Uuid
	{
		let token = Uuid::new_v4();
		let session = Session { expires: OffsetDateTime::now_utc() + self.ttl, user_id, username };
		self.sessions.write().await.insert(token, session);
		token
	}

	/// Remove the [`Session`] identified by `token`, if any.
	pub async fn logout(&self, token: Uuid)
	{
		self.sessions.write().await.remove(&token);
	}

	/// Create a new [`SessionManager`] whose sessions expire `ttl` after login.
	pub fn new(ttl: Duration) -> Self
	{
		Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl }
	}

	/// Look up the [`Session`] identified by `token`. An expired session is discarded and
	/// reported as absent.
	pub async fn session(&self, token: Uuid) -> Option<Session>
	{
		let expired = match self.sessions.read().await.get(&token)
		{
			Some(session) if session.expires > OffsetDateTime::now_utc() => return Some(session.clone()),
			Some(_) => true,
			None => false,
		};

		if expired
		{
			self.sessions.write().await.remove(&token);
		}

		None
	}

	/// The amount of time that it takes before an active session expires.
	pub const fn ttl(&self) -> Duration
	{
		self.ttl
	}
}
