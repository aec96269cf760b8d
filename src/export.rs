//! Contains the renderer which turns a persisted [`Invoice`] into a downloadable PDF document.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::{
	schema::{Customer, Invoice, InvoiceLineDetail},
	DynResult,
};

/// The suggested filename for the rendered document of `invoice`.
pub fn filename(invoice: &Invoice) -> String
{
	format!("invoice_{}.pdf", invoice.id)
}

/// Render `invoice` into a PDF document: its id, the billed customer's name, the persisted
/// total, and one line per [`InvoiceLineDetail`] showing the item name, the quantity, and the
/// unit price snapshotted when the line was created.
///
/// A pure function of the given state. The document is assembled entirely in memory; nothing is
/// written to disk.
pub fn invoice_pdf(
	invoice: &Invoice,
	customer: Option<&Customer>,
	lines: &[InvoiceLineDetail],
) -> DynResult<Vec<u8>>
{
	let (document, page, layer) =
		PdfDocument::new(format!("Invoice #{}", invoice.id), Mm(210.0), Mm(297.0), "Layer 1");
	let bold = document.add_builtin_font(BuiltinFont::HelveticaBold)?;
	let regular = document.add_builtin_font(BuiltinFont::Helvetica)?;

	let mut layer_ref = document.get_page(page).get_layer(layer);
	let mut y = 270.0;

	layer_ref.use_text(format!("Invoice #{}", invoice.id), 24.0, Mm(20.0), Mm(y), &bold);
	y -= 12.0;

	let customer_name = customer.map_or("", |c| c.name.as_str());
	layer_ref.use_text(format!("Customer: {customer_name}"), 12.0, Mm(20.0), Mm(y), &regular);
	y -= 8.0;

	layer_ref.use_text(format!("Total: {}", invoice.total), 12.0, Mm(20.0), Mm(y), &regular);
	y -= 12.0;

	layer_ref.use_text("Items", 16.0, Mm(20.0), Mm(y), &bold);
	y -= 10.0;

	for line in lines
	{
		if y < 20.0
		{
			let (next_page, next_layer) = document.add_page(Mm(210.0), Mm(297.0), "Layer 1");
			layer_ref = document.get_page(next_page).get_layer(next_layer);
			y = 270.0;
		}

		layer_ref.use_text(
			format!("{} - {} x {}", line.item_name, line.quantity, line.price),
			12.0,
			Mm(25.0),
			Mm(y),
			&regular,
		);
		y -= 8.0;
	}

	let bytes = document.save_to_bytes()?;
	Ok(bytes)
}
