//! Line wrapping and pagination
//!
//! Text flows into a single left-aligned cell of fixed width. Lines wrap at
//! the last space that fits; a word wider than the cell is broken between
//! characters. Pages break once the next line would cross the bottom margin.

use super::metrics::{encode_char, glyph_width};
use super::types::{LaidOutPage, PageLayout, PlacedLine, PT_PER_MM};

/// Spaces substituted for a tab
const TAB_WIDTH: usize = 4;

/// Lay out text into positioned lines, one entry per page
///
/// Always returns at least one page, even for empty input.
pub fn lay_out(text: &str, layout: &PageLayout) -> Vec<LaidOutPage> {
    paginate(wrap_text(text, layout), layout)
}

/// Break text into encoded lines that fit the layout's text width
pub fn wrap_text(text: &str, layout: &PageLayout) -> Vec<Vec<u8>> {
    let normalized: String = text.chars().filter(|&c| c != '\r').collect();
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);

    let max_units = layout.text_width() * 1000.0 / layout.font_size_mm();
    let mut lines = Vec::new();

    for paragraph in body.split('\n') {
        let encoded = encode_paragraph(paragraph);
        wrap_paragraph(&encoded, max_units, &mut lines);
    }

    lines
}

fn encode_paragraph(paragraph: &str) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(paragraph.len());
    for c in paragraph.chars() {
        match c {
            '\t' => encoded.extend(std::iter::repeat(b' ').take(TAB_WIDTH)),
            c if c.is_control() => {}
            c => encoded.push(encode_char(c)),
        }
    }
    encoded
}

fn wrap_paragraph(bytes: &[u8], max_units: f64, lines: &mut Vec<Vec<u8>>) {
    if bytes.is_empty() {
        lines.push(Vec::new());
        return;
    }

    let mut start = 0;
    let mut i = 0;
    let mut last_space: Option<usize> = None;
    let mut width = 0.0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b' ' {
            last_space = Some(i);
        }
        width += glyph_width(b) as f64;

        if width > max_units {
            match last_space {
                Some(space) => {
                    lines.push(bytes[start..space].to_vec());
                    i = space + 1;
                }
                None => {
                    // Keep at least one glyph per line
                    if i == start {
                        i += 1;
                    }
                    lines.push(bytes[start..i].to_vec());
                }
            }
            start = i;
            last_space = None;
            width = 0.0;
        } else {
            i += 1;
        }
    }

    if start < bytes.len() {
        lines.push(bytes[start..].to_vec());
    }
}

/// Place wrapped lines onto pages
pub fn paginate(lines: Vec<Vec<u8>>, layout: &PageLayout) -> Vec<LaidOutPage> {
    let per_page = layout.lines_per_page();
    let x = ((layout.margin_left + layout.cell_padding) * PT_PER_MM).round() as i64;
    let baseline_offset = 0.5 * layout.line_height + 0.3 * layout.font_size_mm();

    let mut pages: Vec<LaidOutPage> = Vec::new();
    for (index, glyphs) in lines.into_iter().enumerate() {
        let row = index % per_page;
        if row == 0 {
            pages.push(LaidOutPage::default());
        }

        let top = layout.margin_top + row as f64 * layout.line_height;
        let y = ((layout.page_height - top - baseline_offset) * PT_PER_MM).round() as i64;

        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine { x, y, glyphs });
        }
    }

    if pages.is_empty() {
        pages.push(LaidOutPage::default());
    }
    pages
}
