//! Text measurement for the built-in Helvetica faces.
//!
//! This module handles:
//! - Encoding Unicode text to WinAnsi bytes (unsupported characters become `?`)
//! - Advance widths from the Adobe AFM metrics (1/1000 em units)
//! - String width measurement in points, used for horizontal centering

use super::fonts::LabelFont;

/// Byte substituted for characters outside WinAnsiEncoding
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Helvetica advance widths for WinAnsi codes 0x20..=0xFF.
///
/// Taken from Helvetica.afm. Codes WinAnsi leaves unassigned hold 0; the
/// encoder never produces them.
const HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, // 0x20  space ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // 0x28  ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, // 0x30  0 1 2 3 4 5 6 7
    556, 556, 278, 278, 584, 584, 584, 556, // 0x38  8 9 : ; < = > ?
    1015, 667, 667, 722, 722, 667, 611, 778, // 0x40  @ A B C D E F G
    722, 278, 500, 667, 556, 833, 722, 778, // 0x48  H I J K L M N O
    667, 778, 722, 667, 611, 722, 667, 944, // 0x50  P Q R S T U V W
    667, 667, 611, 278, 278, 278, 469, 556, // 0x58  X Y Z [ \ ] ^ _
    333, 556, 556, 500, 556, 556, 278, 556, // 0x60  ` a b c d e f g
    556, 222, 222, 500, 222, 833, 556, 556, // 0x68  h i j k l m n o
    556, 556, 333, 500, 278, 556, 500, 722, // 0x70  p q r s t u v w
    500, 500, 500, 334, 260, 334, 584, 0, //   0x78  x y z { | } ~
    556, 0, 222, 556, 333, 1000, 556, 556, //  0x80  € ‚ ƒ „ … † ‡
    333, 1000, 667, 333, 1000, 0, 611, 0, //   0x88  ˆ ‰ Š ‹ Œ Ž
    0, 222, 222, 333, 333, 350, 556, 1000, //  0x90  ‘ ’ “ ” • – —
    333, 1000, 500, 333, 944, 0, 500, 667, //  0x98  ˜ ™ š › œ ž Ÿ
    278, 333, 556, 556, 556, 556, 260, 556, // 0xA0  nbsp ¡ ¢ £ ¤ ¥ ¦ §
    333, 737, 370, 556, 584, 333, 737, 333, // 0xA8  ¨ © ª « ¬ shy ® ¯
    400, 584, 333, 333, 333, 556, 537, 278, // 0xB0  ° ± ² ³ ´ µ ¶ ·
    333, 333, 365, 556, 834, 834, 834, 611, // 0xB8  ¸ ¹ º » ¼ ½ ¾ ¿
    667, 667, 667, 667, 667, 667, 1000, 722, // 0xC0  À Á Â Ã Ä Å Æ Ç
    667, 667, 667, 667, 278, 278, 278, 278, // 0xC8  È É Ê Ë Ì Í Î Ï
    722, 722, 778, 778, 778, 778, 778, 584, // 0xD0  Ð Ñ Ò Ó Ô Õ Ö ×
    778, 722, 722, 722, 722, 667, 667, 611, // 0xD8  Ø Ù Ú Û Ü Ý Þ ß
    556, 556, 556, 556, 556, 556, 889, 500, // 0xE0  à á â ã ä å æ ç
    556, 556, 556, 556, 278, 278, 278, 278, // 0xE8  è é ê ë ì í î ï
    556, 556, 556, 556, 556, 556, 556, 584, // 0xF0  ð ñ ò ó ô õ ö ÷
    611, 556, 556, 556, 556, 500, 556, 500, // 0xF8  ø ù ú û ü ý þ ÿ
];

/// Helvetica-Bold advance widths for WinAnsi codes 0x20..=0xFF.
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, // 0x20  space ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // 0x28  ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, // 0x30  0 1 2 3 4 5 6 7
    556, 556, 333, 333, 584, 584, 584, 611, // 0x38  8 9 : ; < = > ?
    975, 722, 722, 722, 722, 667, 611, 778, // 0x40  @ A B C D E F G
    722, 278, 556, 722, 611, 833, 722, 778, // 0x48  H I J K L M N O
    667, 778, 722, 667, 611, 722, 667, 944, // 0x50  P Q R S T U V W
    667, 667, 611, 333, 278, 333, 584, 556, // 0x58  X Y Z [ \ ] ^ _
    333, 556, 611, 556, 611, 556, 333, 611, // 0x60  ` a b c d e f g
    611, 278, 278, 556, 278, 889, 611, 611, // 0x68  h i j k l m n o
    611, 611, 389, 556, 333, 611, 556, 778, // 0x70  p q r s t u v w
    556, 556, 500, 389, 280, 389, 584, 0, //   0x78  x y z { | } ~
    556, 0, 278, 556, 500, 1000, 556, 556, //  0x80  € ‚ ƒ „ … † ‡
    333, 1000, 667, 333, 1000, 0, 611, 0, //   0x88  ˆ ‰ Š ‹ Œ Ž
    0, 278, 278, 500, 500, 350, 556, 1000, //  0x90  ‘ ’ “ ” • – —
    333, 1000, 556, 333, 944, 0, 500, 667, //  0x98  ˜ ™ š › œ ž Ÿ
    278, 333, 556, 556, 556, 556, 280, 556, // 0xA0  nbsp ¡ ¢ £ ¤ ¥ ¦ §
    333, 737, 370, 556, 584, 333, 737, 333, // 0xA8  ¨ © ª « ¬ shy ® ¯
    400, 584, 333, 333, 333, 611, 556, 278, // 0xB0  ° ± ² ³ ´ µ ¶ ·
    333, 333, 365, 556, 834, 834, 834, 611, // 0xB8  ¸ ¹ º » ¼ ½ ¾ ¿
    722, 722, 722, 722, 722, 722, 1000, 722, // 0xC0  À Á Â Ã Ä Å Æ Ç
    667, 667, 667, 667, 278, 278, 278, 278, // 0xC8  È É Ê Ë Ì Í Î Ï
    722, 722, 778, 778, 778, 778, 778, 584, // 0xD0  Ð Ñ Ò Ó Ô Õ Ö ×
    778, 722, 722, 722, 722, 667, 667, 611, // 0xD8  Ø Ù Ú Û Ü Ý Þ ß
    556, 556, 556, 556, 556, 556, 889, 556, // 0xE0  à á â ã ä å æ ç
    556, 556, 556, 556, 278, 278, 278, 278, // 0xE8  è é ê ë ì í î ï
    611, 611, 611, 611, 611, 611, 611, 584, // 0xF0  ð ñ ò ó ô õ ö ÷
    611, 611, 611, 611, 611, 556, 611, 556, // 0xF8  ø ù ú û ü ý þ ÿ
];

/// Map a character to its WinAnsiEncoding code.
///
/// Latin-1 maps through unchanged; the 0x80..0x9F block holds the
/// Windows-1252 punctuation and ligature characters.
fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201C}' => Some(0x93),
            '\u{201D}' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Encode text as WinAnsi bytes for a content stream string.
///
/// Characters without a WinAnsi code become [`REPLACEMENT_BYTE`]. The same
/// bytes are used for width measurement, so substitution never breaks
/// centering.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(REPLACEMENT_BYTE))
        .collect()
}

fn widths(font: LabelFont) -> &'static [u16; 224] {
    match font {
        LabelFont::Helvetica => &HELVETICA_WIDTHS,
        LabelFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
    }
}

/// Width in points of `text` set in `font` at `font_size`.
pub fn text_width(font: LabelFont, text: &str, font_size: f64) -> f64 {
    let table = widths(font);
    let total: u32 = encode_win_ansi(text)
        .iter()
        .filter(|&&code| code >= 0x20)
        .map(|&code| table[(code - 0x20) as usize] as u32)
        .sum();
    total as f64 * font_size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Widget A-1"), b"Widget A-1");
    }

    #[test]
    fn test_encode_windows_1252_block() {
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("\u{201C}x\u{201D}"), vec![0x93, b'x', 0x94]);
        assert_eq!(encode_win_ansi("–"), vec![0x96]);
    }

    #[test]
    fn test_encode_latin_1() {
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn test_encode_unmapped_becomes_question_mark() {
        assert_eq!(encode_win_ansi("日本"), vec![b'?', b'?']);
        assert_eq!(encode_win_ansi("a\u{0394}b"), vec![b'a', b'?', b'b']);
    }

    #[test]
    fn test_text_width_single_glyph() {
        // H is 722/1000 em in Helvetica-Bold
        let w = text_width(LabelFont::HelveticaBold, "H", 16.0);
        assert!((w - 11.552).abs() < 1e-9);
    }

    #[test]
    fn test_text_width_empty() {
        assert_eq!(text_width(LabelFont::Helvetica, "", 16.0), 0.0);
    }

    #[test]
    fn test_text_width_scales_linearly() {
        let w12 = text_width(LabelFont::Helvetica, "Sample", 12.0);
        let w24 = text_width(LabelFont::Helvetica, "Sample", 24.0);
        assert!((w24 - 2.0 * w12).abs() < 1e-9);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let bold = text_width(LabelFont::HelveticaBold, "Label", 16.0);
        let regular = text_width(LabelFont::Helvetica, "Label", 16.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_substituted_char_measures_as_question_mark() {
        let substituted = text_width(LabelFont::Helvetica, "あ", 16.0);
        let question = text_width(LabelFont::Helvetica, "?", 16.0);
        assert_eq!(substituted, question);
    }
}
