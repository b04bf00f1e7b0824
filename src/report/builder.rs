//! Generic document construction from static sheet specs.
//!
//! One routine serves all report kinds: each sheet spec names its row source
//! and column table, and rows are built by copying record values in column
//! order. The free-text query tables bypass the columnar path entirely.

use crate::catalog::{Value, field};
use crate::common::{Error, Result};
use crate::report::document::{Document, Sheet, SheetBody};
use crate::report::types::{ReportKind, SheetLayout, SheetSpec};

/// Builds the export document for a report kind.
pub fn build_document(kind: ReportKind) -> Result<Document> {
    let mut sheets = Vec::with_capacity(kind.sheets().len());
    for spec in kind.sheets() {
        sheets.push(build_sheet(spec)?);
    }
    Ok(Document { sheets })
}

/// Builds one sheet from its spec.
pub fn build_sheet(spec: &SheetSpec) -> Result<Sheet> {
    let body = match spec.layout {
        SheetLayout::Columnar { columns, rows } => {
            let mut out = Vec::with_capacity(rows.len());
            for record in rows {
                let mut cells: Vec<Value> = Vec::with_capacity(columns.len());
                for col in columns {
                    let value = field(record, col.field).ok_or_else(|| Error::MissingField {
                        sheet: spec.name.to_string(),
                        field: col.field.to_string(),
                    })?;
                    cells.push(*value);
                }
                out.push(cells);
            }
            SheetBody::Table { columns, rows: out }
        }
        SheetLayout::Queries(queries) => SheetBody::Queries(queries.to_vec()),
    };

    Ok(Sheet {
        name: spec.name,
        title: spec.title,
        notes: spec.notes,
        col_width: spec.col_width,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Record;
    use crate::catalog::Value::{Int, Text};
    use crate::report::types::{CellFmt, ColumnSpec};

    #[test]
    fn test_sheet_count_matches_spec_count() {
        for kind in ReportKind::all() {
            let doc = build_document(*kind).unwrap();
            assert_eq!(doc.sheets.len(), kind.sheets().len(), "{kind:?}");
        }
    }

    #[test]
    fn test_every_row_matches_header_width() {
        for kind in ReportKind::all() {
            let doc = build_document(*kind).unwrap();
            for sheet in &doc.sheets {
                if let SheetBody::Table { columns, rows } = &sheet.body {
                    for row in rows {
                        assert_eq!(row.len(), columns.len(), "sheet '{}'", sheet.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_values_copied_in_column_order() {
        let doc = build_document(ReportKind::SalesPerformance).unwrap();
        let sheet = &doc.sheets[1];
        assert_eq!(sheet.name, "Sales by Region");
        let SheetBody::Table { rows, .. } = &sheet.body else {
            panic!("expected a columnar sheet");
        };
        assert_eq!(rows[0], vec![Text("North"), Int(245_000), Int(220_000), Int(12)]);
        assert_eq!(rows[1][0], Text("South"));
    }

    #[test]
    fn test_query_sheet_keeps_raw_text() {
        let doc = build_document(ReportKind::CustomerBehavior).unwrap();
        let sheet = doc.sheets.last().unwrap();
        assert_eq!(sheet.name, "SQL Queries");
        assert_eq!(sheet.column_count(), 1);
        let SheetBody::Queries(queries) = &sheet.body else {
            panic!("expected a query sheet");
        };
        assert_eq!(queries.len(), 2);
        assert!(queries[0].starts_with("WITH customer_segments"));
    }

    #[test]
    fn test_missing_field_fails_fast() {
        static ROWS: &[Record] = &[&[("present", Int(1))]];
        let spec = SheetSpec {
            name: "Broken",
            title: "Broken",
            notes: &[],
            col_width: 10.0,
            layout: SheetLayout::Columnar {
                columns: &[ColumnSpec { field: "absent", label: "Absent", fmt: CellFmt::Plain }],
                rows: ROWS,
            },
        };
        let err = build_sheet(&spec).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }
}
