//! The `server` module functions to build the [`Router`] over a [`ServerState`] and serve it
//! from a [`TcpListener`] until shutdown.

mod auth;
mod error;
mod handler;
mod sessions;
mod state;
#[cfg(test)]
mod tests;

use core::{marker::PhantomData, time::Duration};
use std::net::SocketAddr;

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Router};
pub use error::Error;
use handler::Handler;
pub use sessions::SessionManager;
pub use state::ServerState;
use tokio::{net::TcpListener, signal};
use tower::{timeout, ServiceBuilder};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{api::routes, schema::Adapter, DynResult};

/// A billing server over the database backend `A`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Server<A>
{
	/// The [`SocketAddr`] that this server is bound to.
	address: SocketAddr,

	phantom: PhantomData<A>,
}

impl<A> Server<A>
where
	A: Adapter,
{
	/// Create a new [`Server`].
	pub const fn new(address: SocketAddr) -> Self
	{
		Self { address, phantom: PhantomData }
	}

	/// Create the [`Router`] that will be used by the [`Server`].
	///
	/// Operations `timeout`, if specified.
	async fn router(state: ServerState, timeout: Option<Duration>) -> sqlx::Result<Router>
	{
		A::init(state.pool()).await?;

		let handler = Handler::<A>::new();
		let mut router = Router::new()
			.route(routes::CUSTOMER, handler.customer())
			.route(routes::CUSTOMERS, handler.customers())
			.route(routes::HOME, handler.home())
			.route(routes::INVOICE, handler.invoice())
			.route(routes::INVOICES, handler.invoices())
			.route(routes::INVOICE_PDF, handler.invoice_pdf())
			.route(routes::ITEM, handler.item())
			.route(routes::ITEMS, handler.items())
			.route(routes::LOGIN, handler.login())
			.route(routes::LOGOUT, handler.logout())
			.route(routes::PROFILE, handler.profile())
			.route(routes::REGISTER, handler.register());

		if let Some(t) = timeout
		{
			router = router.layer(
				ServiceBuilder::new()
					.layer(HandleErrorLayer::new(|err: BoxError| async move {
						if err.is::<timeout::error::Elapsed>()
						{
							(StatusCode::REQUEST_TIMEOUT, "Request took too long".to_owned())
						}
						else
						{
							(StatusCode::INTERNAL_SERVER_ERROR, format!("Unhandled internal error: {err}"))
						}
					}))
					.timeout(t),
			);
		}

		Ok(router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http()).with_state(state))
	}

	/// Bind to the configured address and serve requests until a shutdown signal arrives, then
	/// close the database pool.
	pub async fn serve(self, state: ServerState, timeout: Option<Duration>) -> DynResult<()>
	{
		let router = Self::router(state.clone(), timeout).await?;
		let listener = TcpListener::bind(self.address).await?;
		tracing::info!("Listening on {}", listener.local_addr()?);

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

		state.pool().close().await;
		Ok(())
	}
}

/// Resolves once the process receives a request to shut down.
async fn shutdown_signal()
{
	let ctrl_c = async {
		signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
		tracing::info!("Received Ctrl+C, shutting down");
	};

	#[cfg(unix)]
	let terminate = async {
		signal::unix::signal(signal::unix::SignalKind::terminate())
			.expect("Failed to install signal handler")
			.recv()
			.await;

		tracing::info!("Received terminate signal, shutting down");
	};

	#[cfg(not(unix))]
	let terminate = core::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
