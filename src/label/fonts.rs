use lopdf::{Dictionary, Document, Object};

/// Built-in Type1 fonts used on labels.
///
/// Both faces belong to the fourteen standard PDF fonts, so no font program
/// is embedded. Strings drawn with them must be WinAnsi encoded to match the
/// `Encoding` entry written by [`create_font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFont {
    Helvetica,
    HelveticaBold,
}

impl LabelFont {
    /// Get the PDF BaseFont name for this font
    pub fn base_font_name(&self) -> &'static str {
        match self {
            LabelFont::Helvetica => "Helvetica",
            LabelFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name the font is selected by in content streams (`Tf` operator)
    pub fn resource_name(&self) -> &'static str {
        match self {
            LabelFont::Helvetica => "F2",
            LabelFont::HelveticaBold => "F1",
        }
    }
}

/// Create a font object in the PDF document.
///
/// Returns the font object ID for use in the page resource dictionary.
pub fn create_font(doc: &mut Document, font: LabelFont) -> (u32, u16) {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", "Font");
    font_dict.set("Subtype", "Type1");
    font_dict.set("BaseFont", font.base_font_name());
    font_dict.set("Encoding", "WinAnsiEncoding");
    doc.add_object(Object::Dictionary(font_dict))
}
