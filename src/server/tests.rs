#![allow(clippy::str_to_string, missing_docs)]

use core::time::Duration;

use axum::http::StatusCode;
use axum_test::{TestServer, TestServerConfig};
use mockd::{contact, internet, name, password, words};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing_test::traced_test;

#[allow(clippy::wildcard_imports)]
use super::*;
use crate::{
	api::{request, response, routes},
	schema::{
		sqlite::{SqliteInvoice, SqliteSchema},
		Customer,
		Id,
		InvoiceAdapter,
		InvoiceSummary,
		Item,
	},
	DynResult,
};

const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 2);

/// Spin up a router over a fresh in-memory database, with a cookie-saving test client in front
/// of it.
async fn setup() -> DynResult<(TestServer, SqlitePool)>
{
	let pool = SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await?;
	let state = ServerState::new(pool.clone(), SessionManager::new(DEFAULT_SESSION_TTL));
	let router = Server::<SqliteSchema>::router(state, None).await?;

	let server =
		TestServer::new_with_config(router, TestServerConfig { save_cookies: true, ..TestServerConfig::default() })?;

	Ok((server, pool))
}

/// Register a fresh user and log the test client in, returning its credentials.
async fn login(server: &TestServer) -> (String, String)
{
	let username = internet::username();
	let pass = password::generate(true, true, true, 12);

	let response = server.post(routes::REGISTER).json(&request::Credentials::new(username.clone(), pass.clone())).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response = server.post(routes::LOGIN).json(&request::Credentials::new(username.clone(), pass.clone())).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	(username, pass)
}

/// Substitute `id` into a parameterized route such as [`routes::CUSTOMER`].
fn with_id(route: &str, id: Id) -> String
{
	route.replace("{id}", &id.to_string())
}

/// `POST` a random customer through the API.
async fn create_customer(server: &TestServer) -> Customer
{
	let response = server
		.post(routes::CUSTOMERS)
		.json(&request::CreateCustomer::new(name::full(), contact::email(), contact::phone()))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);
	response.json::<Customer>()
}

/// `POST` a random item with the given `price` through the API.
async fn create_item(server: &TestServer, price: f64) -> Item
{
	let response = server.post(routes::ITEMS).json(&request::CreateItem::new(words::word(), price)).await;
	assert_eq!(response.status_code(), StatusCode::OK);
	response.json::<Item>()
}

#[tokio::test]
#[traced_test]
async fn home_lists_endpoints() -> DynResult<()>
{
	let (server, _) = setup().await?;

	let response = server.get(routes::HOME).await;
	assert_eq!(response.status_code(), StatusCode::OK);
	assert!(response.json::<Value>()["endpoints"].is_object());

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn customer_create_then_list() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let listed = server.get(routes::CUSTOMERS).await.json::<Vec<Customer>>();
	assert_eq!(listed, vec![customer]);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn customer_update_merges_partial_fields() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let email = contact::email();

	let response = server
		.put(&with_id(routes::CUSTOMER, customer.id))
		.json(&request::UpdateCustomer::new(None, Some(email.clone()), None))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);
	assert_eq!(response.json::<response::Updated>(), response::Updated::new("Customer", customer.id));

	let listed = server.get(routes::CUSTOMERS).await.json::<Vec<Customer>>();
	assert_eq!(listed, vec![Customer { email, ..customer }]);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn customer_delete_removes_record() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let response = server.delete(&with_id(routes::CUSTOMER, customer.id)).await;

	assert_eq!(response.status_code(), StatusCode::OK);
	assert_eq!(response.json::<response::Deleted>(), response::Deleted::new("Customer"));
	assert!(server.get(routes::CUSTOMERS).await.json::<Vec<Customer>>().is_empty());

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn delete_unknown_records_is_not_found() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;
	create_customer(&server).await;
	create_item(&server, 5.).await;

	for (route, error) in [
		(routes::CUSTOMER, "Customer not found"),
		(routes::ITEM, "Item not found"),
		(routes::INVOICE, "Invoice not found"),
	]
	{
		let response = server.delete(&with_id(route, 999)).await;
		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(response.json::<Value>()["error"], error);
	}

	// nothing was deleted along the way
	assert_eq!(server.get(routes::CUSTOMERS).await.json::<Vec<Customer>>().len(), 1);
	assert_eq!(server.get(routes::ITEMS).await.json::<Vec<Item>>().len(), 1);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn item_update_merges_partial_fields() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let item = create_item(&server, 19.99).await;
	let response =
		server.put(&with_id(routes::ITEM, item.id)).json(&request::UpdateItem::new(None, Some(24.99))).await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let listed = server.get(routes::ITEMS).await.json::<Vec<Item>>();
	assert_eq!(listed, vec![Item { price: 24.99, ..item }]);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn create_requests_validate_field_presence() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let response = server.post(routes::CUSTOMERS).json(&json!({ "name": name::full() })).await;
	assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	assert_eq!(response.json::<Value>()["error"], "name, email, and phone are required");

	let response = server.post(routes::ITEMS).json(&json!({ "price": 9.99 })).await;
	assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	assert_eq!(response.json::<Value>()["error"], "name and price are required");

	let response = server.post(routes::INVOICES).json(&json!({ "items": [] })).await;
	assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	assert_eq!(response.json::<Value>()["error"], "customerId is required");

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_total_sums_price_times_quantity() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let response = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(customer.id, vec![request::Line::new(item.id, 3.)]))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let created = response.json::<response::InvoiceCreated>();
	assert_eq!(created.total(), 30.);
	assert!(created.warnings().is_empty());

	let listed = server.get(routes::INVOICES).await.json::<Vec<InvoiceSummary>>();
	assert_eq!(
		listed,
		vec![InvoiceSummary { customer_name: Some(customer.name), id: created.id(), total: 30. }],
	);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_skips_unknown_items_with_warning() -> DynResult<()>
{
	let (server, pool) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let response = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(
			customer.id,
			vec![request::Line::new(item.id, 2.), request::Line::new(999, 5.)],
		))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let created = response.json::<response::InvoiceCreated>();
	assert_eq!(created.total(), 20.);
	assert_eq!(created.warnings(), ["Item 999 not found; line skipped"].as_slice());

	// only the valid line was persisted
	assert_eq!(SqliteInvoice::lines(&pool, created.id()).await?.len(), 1);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_create_with_unknown_customer_is_not_found() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let response = server.post(routes::INVOICES).json(&request::CreateInvoice::new(999, Vec::new())).await;
	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert_eq!(response.json::<Value>()["error"], "Customer not found");

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_update_with_empty_lines_zeroes_total() -> DynResult<()>
{
	let (server, pool) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let created = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(customer.id, vec![request::Line::new(item.id, 3.)]))
		.await
		.json::<response::InvoiceCreated>();

	let response = server
		.put(&with_id(routes::INVOICE, created.id()))
		.json(&request::UpdateInvoice::new(None, Some(Vec::new())))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);
	assert_eq!(response.json::<response::InvoiceUpdated>(), response::InvoiceUpdated::new(created.id(), Vec::new()));

	let listed = server.get(routes::INVOICES).await.json::<Vec<InvoiceSummary>>();
	assert_eq!(listed[0].total, 0.);
	assert!(SqliteInvoice::lines(&pool, created.id()).await?.is_empty());

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_update_without_lines_keeps_total() -> DynResult<()>
{
	let (server, pool) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let other = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let created = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(customer.id, vec![request::Line::new(item.id, 3.)]))
		.await
		.json::<response::InvoiceCreated>();

	let response = server
		.put(&with_id(routes::INVOICE, created.id()))
		.json(&request::UpdateInvoice::new(Some(other.id), None))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let listed = server.get(routes::INVOICES).await.json::<Vec<InvoiceSummary>>();
	assert_eq!(listed, vec![InvoiceSummary { customer_name: Some(other.name), id: created.id(), total: 30. }]);
	assert_eq!(SqliteInvoice::lines(&pool, created.id()).await?.len(), 1);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_update_with_unknown_customer_is_not_found() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let created =
		server.post(routes::INVOICES).json(&request::CreateInvoice::new(customer.id, Vec::new())).await;
	let id = created.json::<response::InvoiceCreated>().id();

	let response =
		server.put(&with_id(routes::INVOICE, id)).json(&request::UpdateInvoice::new(Some(999), None)).await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert_eq!(response.json::<Value>()["error"], "Customer not found");

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_delete_removes_lines() -> DynResult<()>
{
	let (server, pool) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let created = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(customer.id, vec![request::Line::new(item.id, 3.)]))
		.await
		.json::<response::InvoiceCreated>();

	let response = server.delete(&with_id(routes::INVOICE, created.id())).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	assert!(SqliteInvoice::lines(&pool, created.id()).await?.is_empty());
	assert!(server.get(routes::INVOICES).await.json::<Vec<InvoiceSummary>>().is_empty());

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_total_survives_item_price_change() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let created = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(customer.id, vec![request::Line::new(item.id, 3.)]))
		.await
		.json::<response::InvoiceCreated>();

	let response =
		server.put(&with_id(routes::ITEM, item.id)).json(&request::UpdateItem::new(None, Some(99.))).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let listed = server.get(routes::INVOICES).await.json::<Vec<InvoiceSummary>>();
	assert_eq!(listed[0].total, 30.);
	assert_eq!(listed[0].id, created.id());

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn register_duplicate_username_conflicts() -> DynResult<()>
{
	let (server, pool) = setup().await?;

	let username = internet::username();
	let credentials = request::Credentials::new(username.clone(), password::generate(true, true, true, 12));

	let response = server.post(routes::REGISTER).json(&credentials).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response = server.post(routes::REGISTER).json(&credentials).await;
	assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	assert_eq!(response.json::<Value>()["error"], "Username already exists");

	let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1;")
		.bind(&username)
		.fetch_one(&pool)
		.await?;
	assert_eq!(stored, 1);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn register_requires_username_and_password() -> DynResult<()>
{
	let (server, _) = setup().await?;

	let response = server.post(routes::REGISTER).json(&json!({ "username": internet::username() })).await;
	assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	assert_eq!(response.json::<Value>()["error"], "Username and password required");

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn login_with_wrong_password_is_unauthorized() -> DynResult<()>
{
	let (server, _) = setup().await?;

	let username = internet::username();
	let response = server
		.post(routes::REGISTER)
		.json(&request::Credentials::new(username.clone(), password::generate(true, true, true, 12)))
		.await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let response =
		server.post(routes::LOGIN).json(&request::Credentials::new(username, "wrong password".to_string())).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
	assert_eq!(response.json::<Value>()["error"], "Invalid credentials");

	// no session was established, so gated routes stay closed
	let response = server.post(routes::CUSTOMERS).json(&json!({})).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn mutating_routes_require_a_session() -> DynResult<()>
{
	let (server, _) = setup().await?;

	let response = server.post(routes::CUSTOMERS).json(&json!({})).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
	assert_eq!(response.json::<Value>()["error"], "Authentication required");

	let response = server.put(&with_id(routes::ITEM, 1)).json(&json!({})).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

	let response = server.delete(&with_id(routes::INVOICE, 1)).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

	let response = server.post(routes::LOGOUT).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn logout_invalidates_the_session() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;
	create_customer(&server).await;

	let response = server.post(routes::LOGOUT).await;
	assert_eq!(response.status_code(), StatusCode::OK);
	assert_eq!(response.json::<response::LoggedOut>(), response::LoggedOut::new());

	let response = server.post(routes::CUSTOMERS).json(&json!({})).await;
	assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn profile_reports_the_logged_in_user() -> DynResult<()>
{
	let (server, _) = setup().await?;
	let (username, _) = login(&server).await;

	let response = server.get(routes::PROFILE).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let profile = response.json::<response::Profile>();
	assert_eq!(profile.username(), username);

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_pdf_downloads_a_document() -> DynResult<()>
{
	let (server, _) = setup().await?;
	login(&server).await;

	let customer = create_customer(&server).await;
	let item = create_item(&server, 10.).await;

	let created = server
		.post(routes::INVOICES)
		.json(&request::CreateInvoice::new(customer.id, vec![request::Line::new(item.id, 3.)]))
		.await
		.json::<response::InvoiceCreated>();

	let response = server.get(&with_id(routes::INVOICE_PDF, created.id())).await;
	assert_eq!(response.status_code(), StatusCode::OK);

	let headers = response.headers();
	assert_eq!(
		headers.get(axum::http::header::CONTENT_TYPE).and_then(|value| value.to_str().ok()),
		Some("application/pdf"),
	);
	assert_eq!(
		headers.get(axum::http::header::CONTENT_DISPOSITION).and_then(|value| value.to_str().ok()),
		Some(format!("attachment; filename=\"invoice_{}.pdf\"", created.id()).as_str()),
	);

	assert!(response.as_bytes().starts_with(b"%PDF"));

	Ok(())
}

#[tokio::test]
#[traced_test]
async fn invoice_pdf_for_unknown_invoice_is_not_found() -> DynResult<()>
{
	let (server, _) = setup().await?;

	let response = server.get(&with_id(routes::INVOICE_PDF, 999)).await;
	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert_eq!(response.json::<Value>()["error"], "Invoice not found");

	Ok(())
}
