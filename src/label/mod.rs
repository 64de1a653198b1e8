//! Label rendering: product name and date as a print-ready PDF.
//!
//! This module handles:
//! - The two physical label sizes and their exact point dimensions
//! - Rendering a label request into a one-page PDF
//! - Download filenames for rendered labels

use chrono::{DateTime, Local};
use serde::Deserialize;
use thiserror::Error;

mod content;
mod document;
mod fonts;
mod metrics;

pub use content::{DATE_FONT_SIZE, NAME_FONT_SIZE};

/// Convert millimeters to PDF points (1 inch = 72 points)
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}

/// Strftime pattern for the date printed on every label
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Physical label sizes supported by the printer stock.
///
/// The wire values are the dimension strings the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LabelSize {
    /// 48 x 25 mm, one cell
    #[serde(rename = "48x25mm", alias = "single_48x25", alias = "single")]
    Single,
    /// 96 x 25 mm, two identical 48 x 25 mm cells side by side
    #[serde(rename = "96x25mm", alias = "dual_96x25", alias = "dual")]
    Dual,
}

impl LabelSize {
    /// Width of one label cell in millimeters
    pub const CELL_WIDTH_MM: f64 = 48.0;
    /// Label height in millimeters
    pub const HEIGHT_MM: f64 = 25.0;

    /// Number of identical cells on the page
    pub fn cell_count(&self) -> usize {
        match self {
            LabelSize::Single => 1,
            LabelSize::Dual => 2,
        }
    }

    /// Page dimensions in millimeters
    pub fn dimensions_mm(&self) -> (f64, f64) {
        (
            Self::CELL_WIDTH_MM * self.cell_count() as f64,
            Self::HEIGHT_MM,
        )
    }

    /// Page dimensions in points, converted exactly from millimeters
    pub fn dimensions_pt(&self) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Width of one cell in points
    pub fn cell_width_pt(&self) -> f64 {
        mm_to_pt(Self::CELL_WIDTH_MM)
    }

    /// Dimension token used as the form value and in filenames
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSize::Single => "48x25mm",
            LabelSize::Dual => "96x25mm",
        }
    }
}

impl std::fmt::Display for LabelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to render one label
#[derive(Debug, Clone, Deserialize)]
pub struct LabelRequest {
    /// Product name to print
    pub name: String,
    /// Physical size of the label
    pub size: LabelSize,
}

/// A rendered label ready for download
#[derive(Debug, Clone)]
pub struct RenderedLabel {
    /// Serialized PDF document
    pub bytes: Vec<u8>,
    /// Page width in millimeters
    pub width_mm: f64,
    /// Page height in millimeters
    pub height_mm: f64,
    /// Suggested download filename
    pub filename: String,
}

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("product name is empty")]
    EmptyName,
    #[error("pdf generation failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("content compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

/// Render a label dated today.
pub fn render(request: &LabelRequest) -> Result<RenderedLabel, LabelError> {
    render_at(request, Local::now())
}

/// Render a label as of the given instant.
///
/// The instant supplies both the printed date (DD/MM/YYYY) and the filename
/// timestamp. The PDF bytes depend only on name, size and date, so two
/// renders of the same request on the same day are byte-identical.
pub fn render_at(
    request: &LabelRequest,
    at: DateTime<Local>,
) -> Result<RenderedLabel, LabelError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(LabelError::EmptyName);
    }

    let date_text = at.format(DATE_FORMAT).to_string();
    let bytes = document::build_pdf(request.size, name, &date_text)?;
    let (width_mm, height_mm) = request.size.dimensions_mm();

    Ok(RenderedLabel {
        bytes,
        width_mm,
        height_mm,
        filename: download_filename(name, request.size, at),
    })
}

/// Build the download filename for a rendered label.
///
/// The product name is sanitized for use in a quoted Content-Disposition
/// header and as a filesystem name.
pub fn download_filename(name: &str, size: LabelSize, at: DateTime<Local>) -> String {
    let safe_name: String = name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | '"' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}_{}_{}.pdf", safe_name, size, at.format("%Y%m%d_%H%M%S"))
}
