//! Workbook serialization for export documents.
//!
//! Layout per sheet: merged title on row 1, a blank spacer row, optional note
//! lines, the styled header row, then one data row per record. Query sheets
//! render one column wide with a `Query N:` label above each query.

use rust_xlsxwriter::{DocProperties, Workbook, Worksheet};

use crate::catalog::Value;
use crate::common::Result;
use crate::report::{CellFmt, Document, Sheet, SheetBody};
use crate::xlsx::formats::SheetFormats;

/// Serializes an export document into XLSX workbook bytes.
pub fn write_document(document: &Document, author: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_author(author));

    let formats = SheetFormats::new();
    for sheet in &document.sheets {
        write_sheet(&mut workbook, sheet, &formats)?;
    }

    // A document for an unknown project has no sheets; keep the workbook
    // openable by emitting one blank worksheet.
    if document.sheets.is_empty() {
        workbook.add_worksheet();
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(workbook: &mut Workbook, sheet: &Sheet, formats: &SheetFormats) -> Result<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name)?;

    let columns = sheet.column_count() as u16;

    // Title row. A merge needs at least two cells, so single-column sheets
    // get a plain title cell.
    if columns > 1 {
        worksheet.merge_range(0, 0, 0, columns - 1, sheet.title, &formats.title)?;
    } else {
        worksheet.write_with_format(0, 0, sheet.title, &formats.title)?;
    }
    worksheet.set_row_height(0, 30)?;

    // Row 1 stays blank under the title.
    let mut row: u32 = 2;

    if !sheet.notes.is_empty() {
        for note in sheet.notes {
            worksheet.write(row, 0, *note)?;
            row += 1;
        }
        row += 1;
    }

    match &sheet.body {
        SheetBody::Table { columns, rows } => {
            for (col, spec) in columns.iter().enumerate() {
                worksheet.write_with_format(row, col as u16, spec.label, &formats.header)?;
            }
            worksheet.set_row_height(row, 25)?;
            row += 1;

            for cells in rows {
                for (col, (value, spec)) in cells.iter().zip(columns.iter()).enumerate() {
                    write_value(worksheet, row, col as u16, value, formats, spec.fmt)?;
                }
                row += 1;
            }
        }
        SheetBody::Queries(queries) => {
            for (index, query) in queries.iter().enumerate() {
                worksheet.write(row, 0, format!("Query {}:", index + 1))?;
                worksheet.write_with_format(row + 1, 0, *query, &formats.query)?;
                // Blank spacer row between queries
                row += 3;
            }
        }
    }

    for col in 0..columns {
        worksheet.set_column_width(col, sheet.col_width)?;
    }

    Ok(())
}

fn write_value(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
    formats: &SheetFormats,
    fmt: CellFmt,
) -> Result<()> {
    let format = formats.data(fmt);
    match value {
        Value::Text(text) => worksheet.write_with_format(row, col, *text, format)?,
        Value::Int(int) => worksheet.write_with_format(row, col, *int, format)?,
        Value::Float(float) => worksheet.write_with_format(row, col, *float, format)?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Record;
    use crate::catalog::Value::Text;
    use crate::catalog::samples::customer;
    use crate::report::{ColumnSpec, ReportKind, SheetLayout, SheetSpec, build_document, build_sheet};
    use calamine::{Data, Reader, Xlsx};
    use std::io::Cursor;
    use std::io::Read as _;

    fn write_kind(kind: ReportKind) -> Vec<u8> {
        let document = build_document(kind).unwrap();
        write_document(&document, "Test Author").unwrap()
    }

    #[test]
    fn test_output_is_a_zip_container() {
        let bytes = write_kind(ReportKind::SalesPerformance);
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_worksheet_names_in_spec_order() {
        let bytes = write_kind(ReportKind::SalesPerformance);
        let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        assert_eq!(
            workbook.sheet_names().to_vec(),
            vec!["KPIs Dashboard", "Sales by Region", "Monthly Trend", "Top Products"]
        );
    }

    #[test]
    fn test_cell_values_round_trip() {
        let bytes = write_kind(ReportKind::SalesPerformance);
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Sales by Region").unwrap();

        // Title on row 0, blank row 1, header on row 2, data from row 3.
        assert_eq!(range.get_value((0, 0)), Some(&Data::String("Regional Sales Performance".into())));
        assert_eq!(range.get_value((2, 0)), Some(&Data::String("Region".into())));
        assert_eq!(range.get_value((2, 1)), Some(&Data::String("Revenue (₦)".into())));
        assert_eq!(range.get_value((3, 0)), Some(&Data::String("North".into())));
        assert_eq!(range.get_value((3, 1)), Some(&Data::Float(245_000.0)));
        assert_eq!(range.get_value((4, 3)), Some(&Data::Float(-5.0)));
        assert_eq!(range.get_value((6, 0)), Some(&Data::String("West".into())));
    }

    #[test]
    fn test_text_with_ampersand_survives() {
        let bytes = write_kind(ReportKind::EcommerceAnalytics);
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Revenue by Category").unwrap();
        assert_eq!(range.get_value((5, 0)), Some(&Data::String("Home & Garden".into())));
    }

    #[test]
    fn test_comma_and_quote_values_round_trip_exactly() {
        static ROWS: &[Record] = &[&[("vendor", Text(r#"He said "hi", O'Brien, Inc."#))]];
        let spec = SheetSpec {
            name: "Vendors",
            title: "Vendors",
            notes: &[],
            col_width: 30.0,
            layout: SheetLayout::Columnar {
                columns: &[ColumnSpec { field: "vendor", label: "Vendor", fmt: CellFmt::Plain }],
                rows: ROWS,
            },
        };
        let document = Document { sheets: vec![build_sheet(&spec).unwrap()] };
        let bytes = write_document(&document, "Test Author").unwrap();

        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Vendors").unwrap();
        assert_eq!(
            range.get_value((3, 0)),
            Some(&Data::String(r#"He said "hi", O'Brien, Inc."#.into()))
        );
    }

    #[test]
    fn test_query_text_with_commas_round_trips_exactly() {
        let bytes = write_kind(ReportKind::CustomerBehavior);
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("SQL Queries").unwrap();

        assert!(customer::SQL_QUERIES[0].contains(','));
        assert_eq!(
            range.get_value((3, 0)),
            Some(&Data::String(customer::SQL_QUERIES[0].to_string()))
        );
        assert_eq!(
            range.get_value((6, 0)),
            Some(&Data::String(customer::SQL_QUERIES[1].to_string()))
        );
    }

    #[test]
    fn test_note_lines_shift_header_down() {
        let bytes = write_kind(ReportKind::BusinessIntelligence);
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Dashboard Overview").unwrap();

        assert_eq!(
            range.get_value((2, 0)),
            Some(&Data::String(
                "This Excel file contains the data used in the Power BI dashboard.".into()
            ))
        );
        // Two notes plus a blank row put the header on row 5.
        assert_eq!(range.get_value((5, 0)), Some(&Data::String("Metric".into())));
        assert_eq!(range.get_value((6, 1)), Some(&Data::Float(94.0)));
    }

    #[test]
    fn test_query_sheet_layout() {
        let bytes = write_kind(ReportKind::CustomerBehavior);
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("SQL Queries").unwrap();

        assert_eq!(range.get_value((2, 0)), Some(&Data::String("Query 1:".into())));
        let Some(Data::String(query)) = range.get_value((3, 0)) else {
            panic!("expected query text");
        };
        assert!(query.starts_with("WITH customer_segments"));
        assert!(query.contains('\n'));
        assert_eq!(range.get_value((5, 0)), Some(&Data::String("Query 2:".into())));
    }

    #[test]
    fn test_currency_mask_present_in_styles() {
        let bytes = write_kind(ReportKind::CustomerBehavior);
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut styles = String::new();
        archive.by_name("xl/styles.xml").unwrap().read_to_string(&mut styles).unwrap();
        assert!(styles.contains("₦#,##0"));
    }

    #[test]
    fn test_empty_document_yields_minimal_workbook() {
        let bytes = write_document(&Document::default(), "Test Author").unwrap();
        let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names().len(), 1);
    }

    #[test]
    fn test_every_kind_serializes() {
        for kind in ReportKind::all() {
            let bytes = write_kind(*kind);
            let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
            assert_eq!(workbook.sheet_names().len(), kind.sheets().len(), "{kind:?}");
        }
    }
}
