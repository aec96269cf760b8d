//! `billing-server` is a small invoice-management backend. It tracks customers and billable
//! items, composes invoices from `(item, quantity)` lines, and renders a downloadable PDF
//! summary of any invoice.
//!
//! Using this crate as a dependency will allow you to access strongly-typed versions of its
//! [API](api): the [route table](api::routes) plus the [request](api::request) and
//! [response](api::response) bodies each route speaks.

#![forbid(unsafe_code)]
#![warn(
	missing_docs,
	clippy::alloc_instead_of_core,
	clippy::as_underscore,
	clippy::dbg_macro,
	clippy::doc_markdown,
	clippy::empty_structs_with_brackets,
	clippy::enum_glob_use,
	clippy::explicit_into_iter_loop,
	clippy::explicit_iter_loop,
	clippy::filter_map_next,
	clippy::flat_map_option,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::implicit_clone,
	clippy::inefficient_to_string,
	clippy::items_after_statements,
	clippy::manual_assert,
	clippy::manual_ok_or,
	clippy::map_unwrap_or,
	clippy::match_same_arms,
	clippy::missing_const_for_fn,
	clippy::mut_mut,
	clippy::needless_continue,
	clippy::option_option,
	clippy::redundant_closure_for_method_calls,
	clippy::redundant_else,
	clippy::std_instead_of_core,
	clippy::str_to_string,
	clippy::string_add,
	clippy::string_add_assign,
	clippy::string_to_string,
	clippy::try_err,
	clippy::unnecessary_join,
	clippy::unnecessary_wraps,
	clippy::use_self,
	clippy::used_underscore_binding,
	clippy::wildcard_imports
)]

pub mod api;
pub mod args;
mod dyn_result;
pub mod export;
pub mod schema;
pub mod server;

pub use dyn_result::{DynError, DynResult};
