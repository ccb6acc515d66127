//! Helvetica glyph metrics and WinAnsi encoding

/// Advance widths for WinAnsi codes 32..=126, in 1/1000 em
const HELVETICA_ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Width used for codes outside the ASCII table
const DEFAULT_WIDTH: u16 = 556;

/// Replacement glyph for characters WinAnsi cannot represent
pub const REPLACEMENT: u8 = b'?';

/// Advance width of a WinAnsi byte in 1/1000 em
pub fn glyph_width(code: u8) -> u16 {
    match code {
        32..=126 => HELVETICA_ASCII_WIDTHS[(code - 32) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Map a char to its WinAnsi byte
///
/// Latin-1 code points map directly; the C1 range and anything beyond
/// U+00FF falls back to the replacement glyph.
pub fn encode_char(c: char) -> u8 {
    match c as u32 {
        code @ 0x20..=0x7E => code as u8,
        code @ 0xA0..=0xFF => code as u8,
        _ => REPLACEMENT,
    }
}

/// Width of an encoded run in millimetres at the given font size (pt)
pub fn run_width_mm(glyphs: &[u8], font_size_mm: f64) -> f64 {
    let units: u32 = glyphs.iter().map(|&g| glyph_width(g) as u32).sum();
    units as f64 * font_size_mm / 1000.0
}
