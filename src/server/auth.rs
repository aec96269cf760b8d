//! Contains the [`AuthUser`] extractor: the capability required by every mutating route.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use super::{sessions, Error, ServerState};
use crate::schema::Id;

/// The identity bound to the active login session.
///
/// Extracting an [`AuthUser`] rejects any request which does not carry a valid, unexpired
/// session cookie, so naming it in a handler's arguments is what gates that route.
#[derive(Clone, Debug)]
pub struct AuthUser
{
	/// The [`Id`] of the logged-in user.
	pub id: Id,

	/// The session token the request was authenticated with.
	pub token: Uuid,

	/// The username of the logged-in user.
	pub username: String,
}

impl FromRequestParts<ServerState> for AuthUser
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection>
	{
		let jar = CookieJar::from_headers(&parts.headers);
		let token = jar
			.get(sessions::COOKIE)
			.and_then(|cookie| cookie.value().parse().ok())
			.ok_or(Error::SessionRequired)?;

		let session = state.sessions().session(token).await.ok_or(Error::SessionRequired)?;
		Ok(Self { id: session.user_id, token, username: session.username })
	}
}
