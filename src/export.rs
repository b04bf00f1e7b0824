//! The public export operation.
//!
//! One call builds the selected project's report document, serializes it,
//! and returns the bytes together with the download filename. The embedding
//! host owns the actual save-file flow.

use std::path::{Path, PathBuf};

use crate::catalog::{Project, find_project};
use crate::common::{Result, slug};
use crate::report::{Document, ReportKind, build_document};
use crate::xlsx::write_document;

/// MIME type of the produced workbook.
pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Author recorded in the workbook properties.
pub const WORKBOOK_AUTHOR: &str = "Ekene Okoli - Data Analyst Portfolio";

/// A finished export, ready to hand to the host's save-file mechanism.
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// Suggested download filename, e.g. `"sales-performance-dashboard.xlsx"`
    pub filename: String,
    /// MIME type for the download
    pub content_type: &'static str,
    /// Workbook bytes
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Writes the export under its own filename into `dir` and returns the
    /// full path. Convenience for hosts that save to disk.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Exports the report workbook for a project.
///
/// An unknown `project_id` is not an error: it exports a document with zero
/// sheets, serialized as a minimal blank workbook. `project_title` only
/// determines the filename.
pub fn export_project_report(project_id: &str, project_title: &str) -> Result<ExportFile> {
    let document = match ReportKind::from_project_id(project_id) {
        Some(kind) => build_document(kind)?,
        None => Document::default(),
    };

    let bytes = write_document(&document, WORKBOOK_AUTHOR)?;

    Ok(ExportFile {
        filename: download_filename(project_id, project_title),
        content_type: CONTENT_TYPE,
        bytes,
    })
}

/// Builds the download filename: the slugged title, a `-powerbi-data` suffix
/// when the project's tools include Power BI, and the `.xlsx` extension.
fn download_filename(project_id: &str, project_title: &str) -> String {
    let base = slug(project_title);
    if find_project(project_id).is_some_and(Project::uses_power_bi) {
        format!("{base}-powerbi-data.xlsx")
    } else {
        format!("{base}.xlsx")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx};
    use std::io::Cursor;

    #[test]
    fn test_plain_filename() {
        let export =
            export_project_report("sales-performance-dashboard", "Sales Performance Dashboard")
                .unwrap();
        assert_eq!(export.filename, "sales-performance-dashboard.xlsx");
        assert_eq!(export.content_type, CONTENT_TYPE);
    }

    #[test]
    fn test_power_bi_filename_suffix() {
        let export = export_project_report(
            "business-intelligence-dashboard",
            "Business Intelligence Dashboard",
        )
        .unwrap();
        assert_eq!(export.filename, "business-intelligence-dashboard-powerbi-data.xlsx");
    }

    #[test]
    fn test_unknown_project_exports_minimal_workbook() {
        let export = export_project_report("does-not-exist", "Does Not Exist").unwrap();
        assert_eq!(export.filename, "does-not-exist.xlsx");

        let workbook: Xlsx<_> = Xlsx::new(Cursor::new(export.bytes)).unwrap();
        assert_eq!(workbook.sheet_names().len(), 1);
    }

    #[test]
    fn test_sheet_count_matches_dataset_table_count() {
        for project in crate::catalog::PROJECTS {
            let kind = ReportKind::from_project_id(project.id).unwrap();
            let export = export_project_report(project.id, project.title).unwrap();
            let workbook: Xlsx<_> = Xlsx::new(Cursor::new(export.bytes)).unwrap();
            assert_eq!(workbook.sheet_names().len(), kind.sheets().len(), "{}", project.id);
        }
    }

    #[test]
    fn test_write_to_disk() {
        let export =
            export_project_report("ecommerce-analytics-report", "E-commerce Analytics Report")
                .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = export.write_to(dir.path()).unwrap();
        assert!(path.ends_with("e-commerce-analytics-report.xlsx"));
        assert_eq!(std::fs::read(&path).unwrap(), export.bytes);
    }
}
