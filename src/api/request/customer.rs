//! Contains the request bodies for [`routes::CUSTOMERS`](crate::api::routes::CUSTOMERS) and
//! [`routes::CUSTOMER`](crate::api::routes::CUSTOMER).

use serde::{Deserialize, Serialize};

use crate::schema::Customer;

/// The request to create a [`Customer`]. All fields are required; see
/// [`into_fields`](CreateCustomer::into_fields).
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CreateCustomer
{
	/// See [`Customer::email`].
	email: Option<String>,

	/// See [`Customer::name`].
	name: Option<String>,

	/// See [`Customer::phone`].
	phone: Option<String>,
}

impl CreateCustomer
{
	/// Unpack the `(name, email, phone)` fields, or [`None`] if any was absent.
	pub fn into_fields(self) -> Option<(String, String, String)>
	{
		Some((self.name?, self.email?, self.phone?))
	}

	/// Create a new [`CreateCustomer`].
	pub const fn new(name: String, email: String, phone: String) -> Self
	{
		Self { email: Some(email), name: Some(name), phone: Some(phone) }
	}
}

/// The request to update a [`Customer`]. Fields which are left out are left unchanged.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct UpdateCustomer
{
	/// See [`Customer::email`].
	email: Option<String>,

	/// See [`Customer::name`].
	name: Option<String>,

	/// See [`Customer::phone`].
	phone: Option<String>,
}

impl UpdateCustomer
{
	/// Overwrite the fields of `customer` which this request provides.
	pub fn merge_into(self, customer: &mut Customer)
	{
		if let Some(email) = self.email
		{
			customer.email = email;
		}

		if let Some(name) = self.name
		{
			customer.name = name;
		}

		if let Some(phone) = self.phone
		{
			customer.phone = phone;
		}
	}

	/// Create a new [`UpdateCustomer`].
	pub const fn new(name: Option<String>, email: Option<String>, phone: Option<String>) -> Self
	{
		Self { email, name, phone }
	}
}
