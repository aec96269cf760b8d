//! Contains the [`Handler`], which connects the [`api`](crate::api) routes to the
//! [`schema`](crate::schema) adapters.

use core::marker::PhantomData;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
	extract::{Path, State},
	http::header,
	routing::{self, MethodRouter},
	Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use time::OffsetDateTime;
use tracing::Instrument;

use super::{auth::AuthUser, sessions, Error, ServerState};
use crate::{
	api::{request, response},
	export,
	schema::{Adapter, CustomerAdapter, Id, InvoiceAdapter, ItemAdapter, User, UserAdapter},
};

/// Convert the requested invoice lines into the `(item id, quantity)` pairs the
/// [`InvoiceAdapter`] composes from.
fn line_pairs(lines: &[request::Line]) -> Vec<(Id, f64)>
{
	lines.iter().map(|line| (line.item_id(), line.quantity())).collect()
}

/// A handler for the [`routes`](crate::api::routes).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handler<A>
{
	phantom: PhantomData<A>,
}

impl<A> Handler<A>
where
	A: Adapter,
{
	/// The handler for one [`routes::CUSTOMER`](crate::api::routes::CUSTOMER).
	pub fn customer(&self) -> MethodRouter<ServerState>
	{
		routing::put(
			|_: AuthUser,
			 State(state): State<ServerState>,
			 Path(id): Path<Id>,
			 Json(request): Json<request::UpdateCustomer>| async move {
				let mut customer =
					A::Customer::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Customer"))?;

				request.merge_into(&mut customer);
				A::Customer::update(state.pool(), &customer).await?;
				Ok::<_, Error>(Json(response::Updated::new("Customer", id)))
			},
		)
		.delete(|_: AuthUser, State(state): State<ServerState>, Path(id): Path<Id>| async move {
			A::Customer::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Customer"))?;
			A::Customer::delete(state.pool(), id).await?;
			Ok::<_, Error>(Json(response::Deleted::new("Customer")))
		})
	}

	/// The handler for [`routes::CUSTOMERS`](crate::api::routes::CUSTOMERS).
	pub fn customers(&self) -> MethodRouter<ServerState>
	{
		routing::get(|State(state): State<ServerState>| async move {
			A::Customer::retrieve(state.pool()).await.map(Json).map_err(Error::from)
		})
		.post(
			|_: AuthUser, State(state): State<ServerState>, Json(request): Json<request::CreateCustomer>| async move {
				let (name, email, phone) =
					request.into_fields().ok_or(Error::Validation("name, email, and phone are required"))?;

				A::Customer::create(state.pool(), name, email, phone).await.map(Json).map_err(Error::from)
			},
		)
	}

	/// The handler for [`routes::HOME`](crate::api::routes::HOME).
	pub fn home(&self) -> MethodRouter<ServerState>
	{
		routing::get(|| async move {
			Json(json!({
				"message": "Invoice App API",
				"endpoints": {
					"GET /customers": "List all customers",
					"POST /customers": "Create a new customer",
					"PUT /customers/{id}": "Update customer",
					"DELETE /customers/{id}": "Delete customer",

					"GET /items": "List all items",
					"POST /items": "Create a new item",
					"PUT /items/{id}": "Update item",
					"DELETE /items/{id}": "Delete item",

					"GET /invoices": "List all invoices",
					"POST /invoices": "Create a new invoice",
					"PUT /invoices/{id}": "Update invoice",
					"DELETE /invoices/{id}": "Delete invoice",
					"GET /invoices/{id}/pdf": "Download invoice PDF",

					"POST /auth/register": "Register with username & password",
					"POST /auth/login": "Login with username & password",
					"POST /auth/logout": "Logout current user",
					"GET /auth/profile": "View logged in user profile",
				},
			}))
		})
	}

	/// The handler for one [`routes::INVOICE`](crate::api::routes::INVOICE).
	pub fn invoice(&self) -> MethodRouter<ServerState>
	{
		routing::put(
			|_: AuthUser,
			 State(state): State<ServerState>,
			 Path(id): Path<Id>,
			 Json(request): Json<request::UpdateInvoice>| async move {
				let mut invoice =
					A::Invoice::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Invoice"))?;

				if let Some(customer_id) = request.customer_id()
				{
					A::Customer::retrieve_by_id(state.pool(), customer_id)
						.await?
						.ok_or(Error::NotFound("Customer"))?;

					invoice.customer_id = customer_id;
				}

				let lines = request.items().map(line_pairs);
				let skipped = A::Invoice::update(state.pool(), &invoice, lines.as_deref()).await?;
				Ok::<_, Error>(Json(response::InvoiceUpdated::new(id, skipped)))
			},
		)
		.delete(|_: AuthUser, State(state): State<ServerState>, Path(id): Path<Id>| async move {
			A::Invoice::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Invoice"))?;
			A::Invoice::delete(state.pool(), id).await?;
			Ok::<_, Error>(Json(response::Deleted::new("Invoice")))
		})
	}

	/// The handler for [`routes::INVOICE_PDF`](crate::api::routes::INVOICE_PDF).
	pub fn invoice_pdf(&self) -> MethodRouter<ServerState>
	{
		routing::get(|State(state): State<ServerState>, Path(id): Path<Id>| async move {
			let invoice = A::Invoice::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Invoice"))?;

			let (customer, lines) = futures::try_join!(
				A::Customer::retrieve_by_id(state.pool(), invoice.customer_id),
				A::Invoice::line_details(state.pool(), id),
			)?;

			let document = export::invoice_pdf(&invoice, customer.as_ref(), &lines)
				.map_err(|e| Error::Render(e.to_string()))?;

			Ok::<_, Error>((
				[
					(header::CONTENT_TYPE, "application/pdf".to_owned()),
					(
						header::CONTENT_DISPOSITION,
						format!("attachment; filename=\"{}\"", export::filename(&invoice)),
					),
				],
				document,
			))
		})
	}

	/// The handler for [`routes::INVOICES`](crate::api::routes::INVOICES).
	pub fn invoices(&self) -> MethodRouter<ServerState>
	{
		routing::get(|State(state): State<ServerState>| async move {
			A::Invoice::retrieve(state.pool()).await.map(Json).map_err(Error::from)
		})
		.post(
			|_: AuthUser, State(state): State<ServerState>, Json(request): Json<request::CreateInvoice>| async move {
				let customer_id = request.customer_id().ok_or(Error::Validation("customerId is required"))?;
				A::Customer::retrieve_by_id(state.pool(), customer_id)
					.await?
					.ok_or(Error::NotFound("Customer"))?;

				let (invoice, skipped) =
					A::Invoice::create(state.pool(), customer_id, &line_pairs(request.items())).await?;

				Ok::<_, Error>(Json(response::InvoiceCreated::new(invoice.id, invoice.total, skipped)))
			},
		)
	}

	/// The handler for one [`routes::ITEM`](crate::api::routes::ITEM).
	pub fn item(&self) -> MethodRouter<ServerState>
	{
		routing::put(
			|_: AuthUser,
			 State(state): State<ServerState>,
			 Path(id): Path<Id>,
			 Json(request): Json<request::UpdateItem>| async move {
				let mut item = A::Item::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Item"))?;
				request.merge_into(&mut item);
				A::Item::update(state.pool(), &item).await?;
				Ok::<_, Error>(Json(response::Updated::new("Item", id)))
			},
		)
		.delete(|_: AuthUser, State(state): State<ServerState>, Path(id): Path<Id>| async move {
			A::Item::retrieve_by_id(state.pool(), id).await?.ok_or(Error::NotFound("Item"))?;
			A::Item::delete(state.pool(), id).await?;
			Ok::<_, Error>(Json(response::Deleted::new("Item")))
		})
	}

	/// The handler for [`routes::ITEMS`](crate::api::routes::ITEMS).
	pub fn items(&self) -> MethodRouter<ServerState>
	{
		routing::get(|State(state): State<ServerState>| async move {
			A::Item::retrieve(state.pool()).await.map(Json).map_err(Error::from)
		})
		.post(|_: AuthUser, State(state): State<ServerState>, Json(request): Json<request::CreateItem>| async move {
			let (name, price) = request.into_fields().ok_or(Error::Validation("name and price are required"))?;
			A::Item::create(state.pool(), name, price).await.map(Json).map_err(Error::from)
		})
	}

	/// The handler for [`routes::LOGIN`](crate::api::routes::LOGIN).
	pub fn login(&self) -> MethodRouter<ServerState>
	{
		routing::post(|State(state): State<ServerState>, jar: CookieJar, Json(request): Json<request::Credentials>| {
			async move {
				let (username, password) =
					request.into_fields().ok_or(Error::Validation("Username and password required"))?;

				let user = A::User::retrieve_by_username(state.pool(), &username)
					.await?
					.ok_or(Error::InvalidCredentials)?;

				let hash = PasswordHash::new(user.password()).map_err(|e| {
					tracing::error!("Failed to decode user {}'s password hash stored in database", user.username());
					Error::PasswordHash(e.to_string())
				})?;

				if Argon2::default().verify_password(password.as_bytes(), &hash).is_err()
				{
					tracing::info!("Invalid login attempt for user {}", user.username());
					return Err(Error::InvalidCredentials);
				}

				let token = state.sessions().login(user.id(), user.username().to_owned()).await;
				let expires = OffsetDateTime::now_utc() + state.sessions().ttl();
				let jar = jar.add(sessions::cookie::new(sessions::COOKIE, token.to_string(), expires));

				Ok((jar, Json(response::LoggedIn::new(user.id()))))
			}
			.instrument(tracing::info_span!("login_handler"))
		})
	}

	/// The handler for [`routes::LOGOUT`](crate::api::routes::LOGOUT).
	pub fn logout(&self) -> MethodRouter<ServerState>
	{
		routing::post(|auth: AuthUser, State(state): State<ServerState>, jar: CookieJar| {
			async move {
				state.sessions().logout(auth.token).await;
				(jar.remove(sessions::COOKIE), Json(response::LoggedOut::new()))
			}
			.instrument(tracing::info_span!("logout_handler"))
		})
	}

	/// Create a new [`Handler`].
	pub const fn new() -> Self
	{
		Self { phantom: PhantomData }
	}

	/// The handler for [`routes::PROFILE`](crate::api::routes::PROFILE).
	pub fn profile(&self) -> MethodRouter<ServerState>
	{
		routing::get(|auth: AuthUser| async move { Json(response::Profile::new(auth.id, auth.username)) })
	}

	/// The handler for [`routes::REGISTER`](crate::api::routes::REGISTER).
	pub fn register(&self) -> MethodRouter<ServerState>
	{
		routing::post(|State(state): State<ServerState>, Json(request): Json<request::Credentials>| async move {
			let (username, password) =
				request.into_fields().ok_or(Error::Validation("Username and password required"))?;

			if A::User::retrieve_by_username(state.pool(), &username).await?.is_some()
			{
				return Err(Error::Conflict);
			}

			let hash = User::hash(&password).map_err(|e| Error::PasswordHash(e.to_string()))?;
			let user = A::User::create(state.pool(), username, hash).await?;
			Ok(Json(response::Registered::new(user.id())))
		})
	}
}
