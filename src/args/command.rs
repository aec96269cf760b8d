use clap::Subcommand;

use super::sqlite::Sqlite;

/// The database backends which the server is able to operate on.
#[derive(Clone, Debug, Subcommand)]
pub enum Command
{
	/// Store all records in a local SQLite database file.
	Sqlite(Sqlite),
}
