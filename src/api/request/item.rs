//! Contains the request bodies for [`routes::ITEMS`](crate::api::routes::ITEMS) and
//! [`routes::ITEM`](crate::api::routes::ITEM).

use serde::{Deserialize, Serialize};

use crate::schema::Item;

/// The request to create an [`Item`]. Both fields are required; see
/// [`into_fields`](CreateItem::into_fields).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
pub struct CreateItem
{
	/// See [`Item::name`].
	name: Option<String>,

	/// See [`Item::price`].
	price: Option<f64>,
}

impl CreateItem
{
	/// Unpack the `(name, price)` fields, or [`None`] if either was absent.
	pub fn into_fields(self) -> Option<(String, f64)>
	{
		Some((self.name?, self.price?))
	}

	/// Create a new [`CreateItem`].
	pub const fn new(name: String, price: f64) -> Self
	{
		Self { name: Some(name), price: Some(price) }
	}
}

/// The request to update an [`Item`]. Fields which are left out are left unchanged.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
pub struct UpdateItem
{
	/// See [`Item::name`].
	name: Option<String>,

	/// See [`Item::price`].
	price: Option<f64>,
}

impl UpdateItem
{
	/// Overwrite the fields of `item` which this request provides.
	pub fn merge_into(self, item: &mut Item)
	{
		if let Some(name) = self.name
		{
			item.name = name;
		}

		if let Some(price) = self.price
		{
			item.price = price;
		}
	}

	/// Create a new [`UpdateItem`].
	pub const fn new(name: Option<String>, price: Option<f64>) -> Self
	{
		Self { name, price }
	}
}
