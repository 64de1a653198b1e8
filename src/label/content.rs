//! Content stream generation for label pages.
//!
//! This module handles:
//! - The fixed two-line cell layout (bold product name above the date)
//! - Horizontal centering from measured text widths
//! - Building the page content stream operations

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

use super::fonts::LabelFont;
use super::metrics::{encode_win_ansi, text_width};

/// Font size of the product name line, in points
pub const NAME_FONT_SIZE: f64 = 16.0;
/// Font size of the date line, in points
pub const DATE_FONT_SIZE: f64 = 12.0;

/// Fraction of the cell height kept as padding above and below the text block
const VERTICAL_PADDING_RATIO: f64 = 0.1;
/// Name baseline position within the usable height, measured from the padding
const NAME_BASELINE_RATIO: f64 = 0.7;
/// Date baseline position within the usable height, measured from the padding
const DATE_BASELINE_RATIO: f64 = 0.25;
/// Inset of the cell border rectangle, in points
const BORDER_INSET: f64 = 2.0;

/// Baseline heights of the two text lines within one cell, in points from
/// the cell bottom.
#[derive(Debug, Clone, Copy)]
pub struct CellBaselines {
    pub name: f64,
    pub date: f64,
}

impl CellBaselines {
    /// Compute baselines for a cell of the given height
    pub fn for_height(cell_height: f64) -> Self {
        let padding = cell_height * VERTICAL_PADDING_RATIO;
        let usable = cell_height - 2.0 * padding;
        CellBaselines {
            name: padding + usable * NAME_BASELINE_RATIO,
            date: padding + usable * DATE_BASELINE_RATIO,
        }
    }
}

/// Builder for the label page content stream
pub struct LabelContent {
    operations: Vec<Operation>,
}

impl LabelContent {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Draw one label cell: border rectangle, centered name, centered date.
    ///
    /// `origin_x` is the left edge of the cell. The dual size draws the same
    /// cell twice at different origins.
    pub fn add_cell(
        &mut self,
        origin_x: f64,
        cell_width: f64,
        cell_height: f64,
        name: &str,
        date_text: &str,
    ) {
        self.add_border(origin_x, cell_width, cell_height);

        let baselines = CellBaselines::for_height(cell_height);
        self.add_centered_text(
            LabelFont::HelveticaBold,
            NAME_FONT_SIZE,
            name,
            origin_x,
            cell_width,
            baselines.name,
        );
        self.add_centered_text(
            LabelFont::Helvetica,
            DATE_FONT_SIZE,
            date_text,
            origin_x,
            cell_width,
            baselines.date,
        );
    }

    fn add_border(&mut self, origin_x: f64, cell_width: f64, cell_height: f64) {
        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new(
            "re",
            vec![
                (origin_x + BORDER_INSET).into(),
                BORDER_INSET.into(),
                (cell_width - 2.0 * BORDER_INSET).into(),
                (cell_height - 2.0 * BORDER_INSET).into(),
            ],
        ));
        self.operations.push(Operation::new("S", vec![]));
        self.operations.push(Operation::new("Q", vec![]));
    }

    fn add_centered_text(
        &mut self,
        font: LabelFont,
        font_size: f64,
        text: &str,
        origin_x: f64,
        cell_width: f64,
        baseline: f64,
    ) {
        let x = origin_x + (cell_width - text_width(font, text, font_size)) / 2.0;

        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![font.resource_name().into(), font_size.into()],
        ));
        self.operations
            .push(Operation::new("Td", vec![x.into(), baseline.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(text),
                StringFormat::Literal,
            )],
        ));
        self.operations.push(Operation::new("ET", vec![]));
    }

    /// Encode the accumulated operations into content stream bytes
    pub fn encode(self) -> lopdf::Result<Vec<u8>> {
        Content {
            operations: self.operations,
        }
        .encode()
    }
}

impl Default for LabelContent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_ops(content: LabelContent) -> Vec<Operation> {
        let bytes = content.encode().unwrap();
        Content::decode(&bytes).unwrap().operations
    }

    fn text_positions(ops: &[Operation]) -> Vec<(f64, f64)> {
        ops.iter()
            .filter(|op| op.operator == "Td")
            .map(|op| {
                (
                    op.operands[0].as_float().unwrap() as f64,
                    op.operands[1].as_float().unwrap() as f64,
                )
            })
            .collect()
    }

    #[test]
    fn test_baselines_for_25mm_cell() {
        // 25 mm = 70.866 pt: padding 7.087, usable 56.693
        let b = CellBaselines::for_height(70.866);
        assert!((b.name - 46.772).abs() < 0.01);
        assert!((b.date - 21.260).abs() < 0.01);
    }

    #[test]
    fn test_cell_draws_border_and_two_text_lines() {
        let mut content = LabelContent::new();
        content.add_cell(0.0, 136.063, 70.866, "Widget", "25/08/2026");

        let ops = decode_ops(content);
        assert_eq!(ops.iter().filter(|op| op.operator == "re").count(), 1);
        assert_eq!(ops.iter().filter(|op| op.operator == "Tj").count(), 2);
    }

    #[test]
    fn test_name_line_is_centered() {
        let cell_width = 136.063;
        let mut content = LabelContent::new();
        content.add_cell(0.0, cell_width, 70.866, "AB", "25/08/2026");

        let positions = text_positions(&decode_ops(content));
        let expected =
            (cell_width - text_width(LabelFont::HelveticaBold, "AB", NAME_FONT_SIZE)) / 2.0;
        assert!((positions[0].0 - expected).abs() < 0.01);
    }

    #[test]
    fn test_second_cell_is_shifted_by_cell_width() {
        let cell_width = 136.063;
        let mut single = LabelContent::new();
        single.add_cell(0.0, cell_width, 70.866, "Widget", "25/08/2026");
        let mut dual = LabelContent::new();
        dual.add_cell(0.0, cell_width, 70.866, "Widget", "25/08/2026");
        dual.add_cell(cell_width, cell_width, 70.866, "Widget", "25/08/2026");

        let first = text_positions(&decode_ops(single));
        let both = text_positions(&decode_ops(dual));
        assert_eq!(both.len(), 2 * first.len());
        for (i, (x, y)) in first.iter().enumerate() {
            let (x2, y2) = both[first.len() + i];
            assert!((x2 - (x + cell_width)).abs() < 0.01);
            assert!((y2 - y).abs() < 0.01);
        }
    }

    #[test]
    fn test_name_with_delimiters_round_trips() {
        let name = r"50% (Gray\Silver)";
        let mut content = LabelContent::new();
        content.add_cell(0.0, 136.063, 70.866, name, "25/08/2026");

        let ops = decode_ops(content);
        let tj = ops.iter().find(|op| op.operator == "Tj").unwrap();
        match &tj.operands[0] {
            Object::String(bytes, _) => assert_eq!(bytes, &encode_win_ansi(name)),
            other => panic!("expected string operand, got {:?}", other),
        }
    }
}
