//! Contains the [`Error`]s which handlers surface to clients, and their HTTP representation.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while serving a request. Each variant is reported to the client
/// as a JSON object `{"error": message}` with the status code chosen by
/// [`into_response`](IntoResponse::into_response).
#[derive(Debug, Error)]
pub enum Error
{
	/// A registration attempt used a username which is already taken.
	#[error("Username already exists")]
	Conflict,

	/// The database could not complete an operation.
	#[error("{0}")]
	Database(#[from] sqlx::Error),

	/// A login attempt named an unknown user, or presented the wrong password.
	#[error("Invalid credentials")]
	InvalidCredentials,

	/// A referenced record does not exist.
	#[error("{0} not found")]
	NotFound(&'static str),

	/// A password hash could not be produced or parsed.
	#[error("{0}")]
	PasswordHash(String),

	/// The document renderer failed.
	#[error("{0}")]
	Render(String),

	/// A gated route was called without a valid login session.
	#[error("Authentication required")]
	SessionRequired,

	/// A request body was missing required fields.
	#[error("{0}")]
	Validation(&'static str),
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		let status = match self
		{
			Self::Conflict | Self::Validation(_) => StatusCode::BAD_REQUEST,
			Self::Database(_) | Self::PasswordHash(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
			Self::InvalidCredentials | Self::SessionRequired => StatusCode::UNAUTHORIZED,
			Self::NotFound(_) => StatusCode::NOT_FOUND,
		};

		if status.is_server_error()
		{
			tracing::error!("{self}");
		}

		(status, Json(json!({ "error": self.to_string() }))).into_response()
	}
}
