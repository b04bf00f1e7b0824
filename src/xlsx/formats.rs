//! Reusable cell formats for the exported workbook.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

use crate::report::CellFmt;

/// Cell styles shared by every sheet of a report.
pub struct SheetFormats {
    /// Merged title line: bold, dark gray, centered
    pub title: Format,
    /// Header row: bold white on green, centered, thin borders
    pub header: Format,
    /// Data cell without a number mask
    pub text: Format,
    /// Data cell with the `₦#,##0` currency mask
    pub currency: Format,
    /// Data cell with the `#,##0` integer mask
    pub integer: Format,
    /// Data cell with the `0%` percentage mask
    pub percent: Format,
    /// Query text: monospace, wrapped
    pub query: Format,
}

impl SheetFormats {
    pub fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_color(0xFFFFFF)
            .set_background_color(0x10B981)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin);

        let title = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color(0x1F2937)
            .set_align(FormatAlign::Center);

        let data = Format::new()
            .set_border(FormatBorder::Thin)
            .set_border_color(0xE0E0E0)
            .set_align(FormatAlign::VerticalCenter);

        let currency = data.clone().set_num_format("₦#,##0");
        let integer = data.clone().set_num_format("#,##0");
        let percent = data.clone().set_num_format("0%");

        let query = Format::new().set_font_name("Courier New").set_font_size(10).set_text_wrap();

        SheetFormats { title, header, text: data, currency, integer, percent, query }
    }

    /// The data format for a column's display format tag.
    pub fn data(&self, fmt: CellFmt) -> &Format {
        match fmt {
            CellFmt::Plain => &self.text,
            CellFmt::Currency => &self.currency,
            CellFmt::Integer => &self.integer,
            CellFmt::Percent => &self.percent,
        }
    }
}

impl Default for SheetFormats {
    fn default() -> Self {
        Self::new()
    }
}
