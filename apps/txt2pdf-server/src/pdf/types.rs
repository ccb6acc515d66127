//! Page geometry and laid-out text types

/// Points per millimetre (PDF user space is 1/72 inch)
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Fixed page geometry, all lengths in millimetres
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    /// Width of the text cell starting at `margin_left`
    pub cell_width: f64,
    /// Horizontal padding inside the cell on each side
    pub cell_padding: f64,
    pub line_height: f64,
    /// A line whose bottom would pass `page_height - break_margin` goes to a new page
    pub break_margin: f64,
    /// Font size in points
    pub font_size: f64,
}

impl Default for PageLayout {
    /// A4 portrait, Helvetica 12pt, 10mm lines in a 190mm cell
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 10.0,
            margin_top: 10.0,
            cell_width: 190.0,
            cell_padding: 1.0,
            line_height: 10.0,
            break_margin: 20.0,
            font_size: 12.0,
        }
    }
}

impl PageLayout {
    /// Width available to glyphs on a line, in millimetres
    pub fn text_width(&self) -> f64 {
        self.cell_width - 2.0 * self.cell_padding
    }

    /// Lowest y (from the top) a line may end at before breaking the page
    pub fn page_break_trigger(&self) -> f64 {
        self.page_height - self.break_margin
    }

    /// Number of lines that fit on one page
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_break_trigger() - self.margin_top;
        (usable / self.line_height).floor().max(1.0) as usize
    }

    /// Font size converted to millimetres
    pub fn font_size_mm(&self) -> f64 {
        self.font_size / PT_PER_MM
    }

    /// Media box in points, rounded to whole units
    pub fn media_box(&self) -> (i64, i64) {
        (
            (self.page_width * PT_PER_MM).round() as i64,
            (self.page_height * PT_PER_MM).round() as i64,
        )
    }
}

/// One line placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Baseline origin in PDF points, measured from the bottom-left corner
    pub x: i64,
    pub y: i64,
    /// WinAnsi-encoded glyph bytes
    pub glyphs: Vec<u8>,
}

/// A page of laid-out lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub lines: Vec<PlacedLine>,
}
