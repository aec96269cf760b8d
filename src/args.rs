//! Contains the [command-line arguments](Args) which configure the server.

mod command;
mod sqlite;

use std::net::SocketAddr;

use clap::Parser;
use command::Command;
use tracing_subscriber::{fmt, EnvFilter};

use crate::DynResult;

/// The billing server tracks customers and billable items, composes invoices from them, and
/// exports any invoice as a PDF. Pass --help for more.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct Args
{
	/// The IP address to bind the billing server to.
	#[arg(default_value = "127.0.0.1:3000", long, short)]
	address: SocketAddr,

	/// The database backend which will be used for this server.
	#[command(subcommand)]
	command: Command,
}

impl Args
{
	/// Interpret the parsed arguments and run the server until shutdown.
	pub async fn run(self) -> DynResult<()>
	{
		fmt().with_env_filter(EnvFilter::from_default_env()).init();

		match self.command
		{
			Command::Sqlite(s) => s.run(self.address),
		}
		.await
	}
}
