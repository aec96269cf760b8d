//! The API endpoints for the [`billing-server`](crate).

/// The endpoint for a single [`Customer`](crate::schema::Customer), by id.
///
/// Accepts `PUT` (partial field merge) and `DELETE`.
pub const CUSTOMER: &str = "/customers/{id}";

/// The endpoint for the [`Customer`](crate::schema::Customer) registry.
///
/// Accepts `GET` (list all) and `POST` (create).
pub const CUSTOMERS: &str = "/customers";

/// The root endpoint. Accepts a `GET` request, and responds with a map of every other endpoint.
pub const HOME: &str = "/";

/// The endpoint for a single [`Invoice`](crate::schema::Invoice), by id.
///
/// Accepts `PUT` (customer reassignment and/or line replacement) and `DELETE`.
pub const INVOICE: &str = "/invoices/{id}";

/// The endpoint for the [`Invoice`](crate::schema::Invoice) registry.
///
/// Accepts `GET` (list all, denormalized with the customer name) and `POST` (compose a new
/// invoice from `(item, quantity)` lines).
pub const INVOICES: &str = "/invoices";

/// The endpoint which renders one [`Invoice`](crate::schema::Invoice) as a downloadable PDF.
///
/// Accepts a `GET` request, and responds with an `application/pdf` attachment.
pub const INVOICE_PDF: &str = "/invoices/{id}/pdf";

/// The endpoint for a single [`Item`](crate::schema::Item), by id.
///
/// Accepts `PUT` (partial field merge) and `DELETE`.
pub const ITEM: &str = "/items/{id}";

/// The endpoint for the [`Item`](crate::schema::Item) registry.
///
/// Accepts `GET` (list all) and `POST` (create).
pub const ITEMS: &str = "/items";

/// The endpoint for logging in.
///
/// Accepts a `POST` request with [`Credentials`](super::request::Credentials), and establishes a
/// session bound to a cookie.
pub const LOGIN: &str = "/auth/login";

/// The endpoint for logging out.
///
/// Accepts a `POST` request with no body. Requires an active session.
pub const LOGOUT: &str = "/auth/logout";

/// The endpoint for retrieving the currently logged-in user's identity.
///
/// Accepts a `GET` request with no body. Requires an active session.
pub const PROFILE: &str = "/auth/profile";

/// The endpoint for registering a new [`User`](crate::schema::User).
///
/// Accepts a `POST` request with [`Credentials`](super::request::Credentials).
pub const REGISTER: &str = "/auth/register";
