use core::time::Duration;
use std::{net::SocketAddr, path::PathBuf};

use clap::Args;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{
	schema::sqlite::SqliteSchema,
	server::{Server, ServerState, SessionManager},
	DynResult,
};

/// Spawn a billing server which stores its records in a SQLite database file.
#[derive(Args, Clone, Debug)]
pub struct Sqlite
{
	/// The file which holds the database. Created if it does not already exist.
	#[arg(default_value = "invoice.db")]
	database: PathBuf,

	/// The amount of time before an inactive login session must authenticate again.
	#[arg(default_value = "2h", long, short, value_parser = humantime::parse_duration)]
	session_ttl: Duration,

	/// The amount of time to wait before an operation is abandoned.
	#[arg(long, short, value_parser = humantime::parse_duration)]
	timeout: Option<Duration>,
}

impl Sqlite
{
	/// Open the database, then serve requests against it until shutdown.
	pub async fn run(self, address: SocketAddr) -> DynResult<()>
	{
		let connect_options = SqliteConnectOptions::new().filename(&self.database).create_if_missing(true);
		let pool = SqlitePoolOptions::new().connect_with(connect_options).await?;

		let state = ServerState::new(pool, SessionManager::new(self.session_ttl));
		Server::<SqliteSchema>::new(address).serve(state, self.timeout).await
	}
}
