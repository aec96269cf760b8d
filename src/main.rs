//! `billing-server` is a small invoice-management backend: it tracks customers and billable
//! items, composes invoices from `(item, quantity)` lines, and renders a downloadable PDF
//! summary of any invoice.
//!
//! # Usage
//!
//! * For basic information, run `billing-server help` from the command line.
//! * Point it at a database file with e.g. `billing-server sqlite invoice.db`.

use billing_server::args::Args;
use clap::Parser;

/// Interprets arguments to `billing-server` (if any) and executes the implied instruction.
#[tokio::main]
async fn main()
{
	if let Err(e) = Args::parse().run().await
	{
		eprintln!("{e}");

		#[cfg(debug_assertions)]
		eprintln!("Raw error: {e:#?}");
	}
}
