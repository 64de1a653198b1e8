//! PDF document assembly for rendered labels.

use std::io::Write;

use lopdf::{Document, Object, Stream, dictionary};

use super::content::LabelContent;
use super::fonts::{LabelFont, create_font};
use super::{LabelError, LabelSize};

/// Compress content stream data for a FlateDecode filter
fn compress_stream(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Assemble the one-page label document and serialize it to bytes.
///
/// The page MediaBox carries the exact point dimensions of the requested
/// size. Nothing time-dependent is written, so the output is deterministic
/// for a given name, size and date.
pub fn build_pdf(size: LabelSize, name: &str, date_text: &str) -> Result<Vec<u8>, LabelError> {
    let (width_pt, height_pt) = size.dimensions_pt();
    let cell_width_pt = size.cell_width_pt();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = create_font(&mut doc, LabelFont::HelveticaBold);
    let regular_id = create_font(&mut doc, LabelFont::Helvetica);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            LabelFont::HelveticaBold.resource_name() => Object::Reference(bold_id),
            LabelFont::Helvetica.resource_name() => Object::Reference(regular_id),
        },
    });

    let mut content = LabelContent::new();
    for cell in 0..size.cell_count() {
        content.add_cell(cell as f64 * cell_width_pt, cell_width_pt, height_pt, name, date_text);
    }

    let compressed = compress_stream(&content.encode()?)?;
    let content_id = doc.add_object(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        compressed,
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.0.into(), 0.0.into(), width_pt.into(), height_pt.into()],
        "Resources" => Object::Reference(resources_id),
        "Contents" => Object::Reference(content_id),
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
