//! Contains helpers for the session [`Cookie`]s issued at login.

use std::borrow::Cow;

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::OffsetDateTime;

/// Create a session cookie: HttpOnly, SameSite=Strict, valid for the whole site until
/// `expires`.
pub fn new<'cookie, N, V>(name: N, value: V, expires: OffsetDateTime) -> Cookie<'cookie>
where
	N: Into<Cow<'cookie, str>>,
	V: Into<Cow<'cookie, str>>,
{
	let mut cookie = Cookie::new(name, value);
	cookie.set_expires(expires);
	cookie.set_http_only(true);
	cookie.set_path("/");
	cookie.set_same_site(SameSite::Strict);
	cookie
}
