//! Report kinds and their static sheet specifications.
//!
//! Each report kind carries an ordered list of sheet specs, and each columnar
//! sheet spec an explicit `(field, header label, display format)` column
//! table. Header labels include currency symbols and parenthetical units that
//! cannot be recovered from field names, so the mapping is stated rather than
//! derived by string matching.

use crate::catalog::Record;
use crate::catalog::samples::{
    business, customer, ecommerce, monitoring, operational, sales, validation,
};

/// Column-uniform display format applied when a value is written to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFmt {
    /// No number mask
    Plain,
    /// Naira currency mask, `₦#,##0`
    Currency,
    /// Thousands-separated integer mask, `#,##0`
    Integer,
    /// Percentage mask, `0%`
    Percent,
}

/// One column of a columnar sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Field name in the underlying records
    pub field: &'static str,
    /// Header label shown in the sheet, e.g. `"Avg Spend (₦)"`
    pub label: &'static str,
    /// Display format for every data cell in this column
    pub fmt: CellFmt,
}

/// How a sheet's body is laid out.
#[derive(Debug, Clone, Copy)]
pub enum SheetLayout {
    /// One header row, one data row per record, values in column order.
    Columnar {
        columns: &'static [ColumnSpec],
        rows: &'static [Record],
    },
    /// Free-text queries rendered one column wide: per query a `Query N:`
    /// label row, the query text, and a blank spacer row. No header row.
    Queries(&'static [&'static str]),
}

/// Specification of one worksheet within a report.
#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
    /// Worksheet tab name
    pub name: &'static str,
    /// Merged title line above the table
    pub title: &'static str,
    /// Plain note lines between the title and the header (usually empty)
    pub notes: &'static [&'static str],
    /// Uniform column width for the sheet
    pub col_width: f64,
    /// Body layout
    pub layout: SheetLayout,
}

/// The closed set of report kinds, one per portfolio case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    SalesPerformance,
    CustomerBehavior,
    BusinessIntelligence,
    EcommerceAnalytics,
    OperationalEfficiency,
    PatientValidation,
    PatientMonitoring,
}

/// Project identifier to report kind dispatch table.
static REPORT_KINDS: phf::Map<&'static str, ReportKind> = phf::phf_map! {
    "sales-performance-dashboard" => ReportKind::SalesPerformance,
    "customer-behavior-analysis" => ReportKind::CustomerBehavior,
    "business-intelligence-dashboard" => ReportKind::BusinessIntelligence,
    "ecommerce-analytics-report" => ReportKind::EcommerceAnalytics,
    "operational-efficiency-analysis" => ReportKind::OperationalEfficiency,
    "patient-data-validation" => ReportKind::PatientValidation,
    "patient-monitoring-dashboard" => ReportKind::PatientMonitoring,
};

impl ReportKind {
    /// Resolves a project identifier to its report kind, if any.
    pub fn from_project_id(id: &str) -> Option<Self> {
        REPORT_KINDS.get(id).copied()
    }

    /// The project identifier this report kind belongs to.
    pub fn project_id(&self) -> &'static str {
        match self {
            ReportKind::SalesPerformance => "sales-performance-dashboard",
            ReportKind::CustomerBehavior => "customer-behavior-analysis",
            ReportKind::BusinessIntelligence => "business-intelligence-dashboard",
            ReportKind::EcommerceAnalytics => "ecommerce-analytics-report",
            ReportKind::OperationalEfficiency => "operational-efficiency-analysis",
            ReportKind::PatientValidation => "patient-data-validation",
            ReportKind::PatientMonitoring => "patient-monitoring-dashboard",
        }
    }

    /// All report kinds, in catalog order.
    pub fn all() -> &'static [ReportKind] {
        &[
            ReportKind::SalesPerformance,
            ReportKind::CustomerBehavior,
            ReportKind::BusinessIntelligence,
            ReportKind::EcommerceAnalytics,
            ReportKind::OperationalEfficiency,
            ReportKind::PatientValidation,
            ReportKind::PatientMonitoring,
        ]
    }

    /// The ordered sheet specs making up this report.
    pub fn sheets(&self) -> &'static [SheetSpec] {
        match self {
            ReportKind::SalesPerformance => SALES_SHEETS,
            ReportKind::CustomerBehavior => CUSTOMER_SHEETS,
            ReportKind::BusinessIntelligence => BUSINESS_SHEETS,
            ReportKind::EcommerceAnalytics => ECOMMERCE_SHEETS,
            ReportKind::OperationalEfficiency => OPERATIONAL_SHEETS,
            ReportKind::PatientValidation => VALIDATION_SHEETS,
            ReportKind::PatientMonitoring => MONITORING_SHEETS,
        }
    }
}

use CellFmt::{Currency, Integer, Percent, Plain};

static SALES_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "KPIs Dashboard",
        title: "Sales Performance KPIs",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "label", label: "Metric", fmt: Plain },
                ColumnSpec { field: "value", label: "Value", fmt: Plain },
                ColumnSpec { field: "change", label: "Change", fmt: Plain },
                ColumnSpec { field: "status", label: "Status", fmt: Plain },
            ],
            rows: sales::KPIS,
        },
    },
    SheetSpec {
        name: "Sales by Region",
        title: "Regional Sales Performance",
        notes: &[],
        col_width: 18.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "region", label: "Region", fmt: Plain },
                ColumnSpec { field: "revenue", label: "Revenue (₦)", fmt: Currency },
                ColumnSpec { field: "target", label: "Target (₦)", fmt: Currency },
                ColumnSpec { field: "growth", label: "Growth (%)", fmt: Percent },
            ],
            rows: sales::SALES_BY_REGION,
        },
    },
    SheetSpec {
        name: "Monthly Trend",
        title: "Revenue Trend vs Forecast",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "month", label: "Month", fmt: Plain },
                ColumnSpec { field: "revenue", label: "Actual Revenue (₦)", fmt: Currency },
                ColumnSpec { field: "forecast", label: "Forecast (₦)", fmt: Currency },
            ],
            rows: sales::MONTHLY_TREND,
        },
    },
    SheetSpec {
        name: "Top Products",
        title: "Top Performing Products",
        notes: &[],
        col_width: 18.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "name", label: "Product", fmt: Plain },
                ColumnSpec { field: "sales", label: "Sales (₦)", fmt: Currency },
                ColumnSpec { field: "units", label: "Units Sold", fmt: Plain },
            ],
            rows: sales::TOP_PRODUCTS,
        },
    },
];

static CUSTOMER_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "Customer Segments",
        title: "Customer Segmentation Analysis",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "segment", label: "Segment", fmt: Plain },
                ColumnSpec { field: "count", label: "Customer Count", fmt: Plain },
                ColumnSpec { field: "avgSpend", label: "Avg Spend (₦)", fmt: Currency },
                ColumnSpec { field: "churnRisk", label: "Churn Risk (%)", fmt: Plain },
            ],
            rows: customer::CUSTOMER_SEGMENTS,
        },
    },
    SheetSpec {
        name: "Purchase Patterns",
        title: "Weekly Purchase Patterns",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "dayOfWeek", label: "Day of Week", fmt: Plain },
                ColumnSpec { field: "orders", label: "Orders", fmt: Plain },
                ColumnSpec { field: "avgValue", label: "Avg Order Value (₦)", fmt: Currency },
            ],
            rows: customer::PURCHASE_PATTERNS,
        },
    },
    SheetSpec {
        name: "Customer LTV",
        title: "Customer Lifetime Value by Cohort",
        notes: &[],
        col_width: 18.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "cohort", label: "Cohort", fmt: Plain },
                ColumnSpec { field: "ltv", label: "LTV (₦)", fmt: Currency },
                ColumnSpec { field: "retention", label: "Retention (%)", fmt: Plain },
            ],
            rows: customer::LIFETIME_VALUE,
        },
    },
    SheetSpec {
        name: "SQL Queries",
        title: "SQL Queries Used in Analysis",
        notes: &[],
        col_width: 80.0,
        layout: SheetLayout::Queries(customer::SQL_QUERIES),
    },
];

static BUSINESS_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "Dashboard Overview",
        title: "Power BI Dashboard - Executive Summary",
        notes: &[
            "This Excel file contains the data used in the Power BI dashboard.",
            "To recreate the dashboard, import this data into Power BI Desktop.",
        ],
        col_width: 25.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "metric", label: "Metric", fmt: Plain },
                ColumnSpec { field: "current", label: "Current Value", fmt: Plain },
                ColumnSpec { field: "target", label: "Target", fmt: Plain },
                ColumnSpec { field: "trend", label: "Trend", fmt: Plain },
            ],
            rows: business::OPERATIONAL_METRICS,
        },
    },
    SheetSpec {
        name: "Department KPIs",
        title: "Department Budget vs Actual Performance",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "dept", label: "Department", fmt: Plain },
                ColumnSpec { field: "budget", label: "Budget (₦)", fmt: Currency },
                ColumnSpec { field: "actual", label: "Actual (₦)", fmt: Currency },
                ColumnSpec { field: "efficiency", label: "Efficiency (%)", fmt: Plain },
            ],
            rows: business::DEPARTMENT_KPIS,
        },
    },
    SheetSpec {
        name: "Financial Metrics",
        title: "Quarterly Financial Performance (Millions ₦)",
        notes: &[],
        col_width: 18.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "quarter", label: "Quarter", fmt: Plain },
                ColumnSpec { field: "revenue", label: "Revenue (₦M)", fmt: Plain },
                ColumnSpec { field: "expenses", label: "Expenses (₦M)", fmt: Plain },
                ColumnSpec { field: "profit", label: "Profit (₦M)", fmt: Plain },
            ],
            rows: business::FINANCIAL_METRICS,
        },
    },
];

static ECOMMERCE_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "Conversion Funnel",
        title: "E-commerce Conversion Funnel Analysis",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "stage", label: "Stage", fmt: Plain },
                ColumnSpec { field: "count", label: "Count", fmt: Integer },
                ColumnSpec { field: "rate", label: "Conversion Rate (%)", fmt: Plain },
            ],
            rows: ecommerce::CONVERSION_FUNNEL,
        },
    },
    SheetSpec {
        name: "Traffic Sources",
        title: "Customer Journey - Traffic Sources",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "touchpoint", label: "Touchpoint", fmt: Plain },
                ColumnSpec { field: "percentage", label: "Percentage (%)", fmt: Plain },
            ],
            rows: ecommerce::CUSTOMER_JOURNEY,
        },
    },
    SheetSpec {
        name: "Revenue by Category",
        title: "Revenue Performance by Product Category",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "category", label: "Category", fmt: Plain },
                ColumnSpec { field: "revenue", label: "Revenue (₦)", fmt: Currency },
                ColumnSpec { field: "orders", label: "Orders", fmt: Plain },
            ],
            rows: ecommerce::REVENUE_BY_CATEGORY,
        },
    },
];

static OPERATIONAL_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "Process Improvements",
        title: "Process Time Improvements (Minutes)",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "process", label: "Process", fmt: Plain },
                ColumnSpec { field: "before", label: "Before (min)", fmt: Plain },
                ColumnSpec { field: "after", label: "After (min)", fmt: Plain },
                ColumnSpec { field: "improvement", label: "Improvement (%)", fmt: Plain },
            ],
            rows: operational::PROCESS_METRICS,
        },
    },
    SheetSpec {
        name: "Resource Utilization",
        title: "Resource Utilization Analysis",
        notes: &[],
        col_width: 25.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "resource", label: "Resource", fmt: Plain },
                ColumnSpec { field: "utilization", label: "Current Utilization (%)", fmt: Plain },
                ColumnSpec { field: "optimal", label: "Optimal (%)", fmt: Plain },
            ],
            rows: operational::RESOURCE_UTILIZATION,
        },
    },
    SheetSpec {
        name: "Efficiency Trend",
        title: "Weekly Efficiency Trend",
        notes: &[],
        col_width: 18.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "week", label: "Week", fmt: Plain },
                ColumnSpec { field: "efficiency", label: "Efficiency (%)", fmt: Plain },
                ColumnSpec { field: "target", label: "Target (%)", fmt: Plain },
            ],
            rows: operational::WEEKLY_TREND,
        },
    },
    SheetSpec {
        name: "SQL Queries",
        title: "SQL Analysis Queries",
        notes: &[],
        col_width: 80.0,
        layout: SheetLayout::Queries(operational::SQL_QUERIES),
    },
];

static VALIDATION_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "Validation Results",
        title: "Patient Data Validation Summary",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "category", label: "Category", fmt: Plain },
                ColumnSpec { field: "total", label: "Total Records", fmt: Integer },
                ColumnSpec { field: "valid", label: "Valid Records", fmt: Integer },
                ColumnSpec { field: "errors", label: "Errors", fmt: Plain },
            ],
            rows: validation::VALIDATION_RESULTS,
        },
    },
    SheetSpec {
        name: "Error Analysis",
        title: "Error Types and Severity",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "type", label: "Error Type", fmt: Plain },
                ColumnSpec { field: "count", label: "Count", fmt: Plain },
                ColumnSpec { field: "severity", label: "Severity", fmt: Plain },
            ],
            rows: validation::ERROR_TYPES,
        },
    },
    SheetSpec {
        name: "Migration Timeline",
        title: "Data Migration Phases",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "phase", label: "Phase", fmt: Plain },
                ColumnSpec { field: "status", label: "Status", fmt: Plain },
                ColumnSpec { field: "records", label: "Records Processed", fmt: Integer },
            ],
            rows: validation::MIGRATION_TIMELINE,
        },
    },
    SheetSpec {
        name: "Field Accuracy",
        title: "Data Field Accuracy Rates",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "field", label: "Field", fmt: Plain },
                ColumnSpec { field: "accuracy", label: "Accuracy (%)", fmt: Plain },
            ],
            rows: validation::FIELD_ACCURACY,
        },
    },
];

static MONITORING_SHEETS: &[SheetSpec] = &[
    SheetSpec {
        name: "Dashboard Overview",
        title: "Patient Data Monitoring Dashboard",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "metric", label: "Metric", fmt: Plain },
                ColumnSpec { field: "value", label: "Current Value", fmt: Plain },
                ColumnSpec { field: "target", label: "Target", fmt: Plain },
                ColumnSpec { field: "status", label: "Status", fmt: Plain },
            ],
            rows: monitoring::QUALITY_METRICS,
        },
    },
    SheetSpec {
        name: "Validation Progress",
        title: "Daily Validation Progress",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "day", label: "Day", fmt: Plain },
                ColumnSpec { field: "validated", label: "Records Validated", fmt: Integer },
                ColumnSpec { field: "pending", label: "Pending", fmt: Integer },
            ],
            rows: monitoring::VALIDATION_PROGRESS,
        },
    },
    SheetSpec {
        name: "Team Performance",
        title: "Team Validation Performance",
        notes: &[],
        col_width: 20.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "team", label: "Team", fmt: Plain },
                ColumnSpec { field: "recordsValidated", label: "Records Validated", fmt: Integer },
                ColumnSpec { field: "accuracy", label: "Accuracy (%)", fmt: Plain },
            ],
            rows: monitoring::TEAM_PERFORMANCE,
        },
    },
    SheetSpec {
        name: "Time Savings",
        title: "Manual Reporting Hours - Before vs After Automation",
        notes: &[],
        col_width: 22.0,
        layout: SheetLayout::Columnar {
            columns: &[
                ColumnSpec { field: "task", label: "Task", fmt: Plain },
                ColumnSpec { field: "before", label: "Before (hours)", fmt: Plain },
                ColumnSpec { field: "after", label: "After (hours)", fmt: Plain },
                ColumnSpec { field: "saved", label: "Hours Saved", fmt: Plain },
            ],
            rows: monitoring::REPORTING_HOURS,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_round_trips() {
        for kind in ReportKind::all() {
            assert_eq!(ReportKind::from_project_id(kind.project_id()), Some(*kind));
        }
        assert_eq!(ReportKind::from_project_id("does-not-exist"), None);
    }

    #[test]
    fn test_every_kind_has_one_to_five_sheets() {
        for kind in ReportKind::all() {
            let count = kind.sheets().len();
            assert!((1..=5).contains(&count), "{kind:?} has {count} sheets");
        }
    }

    #[test]
    fn test_every_kind_maps_to_a_catalog_project() {
        for kind in ReportKind::all() {
            assert!(
                crate::catalog::find_project(kind.project_id()).is_some(),
                "{kind:?} has no catalog entry"
            );
        }
    }

    #[test]
    fn test_column_specs_resolve_in_every_record() {
        for kind in ReportKind::all() {
            for sheet in kind.sheets() {
                if let SheetLayout::Columnar { columns, rows } = sheet.layout {
                    for record in rows {
                        for col in columns {
                            assert!(
                                crate::catalog::field(record, col.field).is_some(),
                                "sheet '{}' field '{}' missing from a record",
                                sheet.name,
                                col.field
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_worksheet_names_fit_excel_limit() {
        for kind in ReportKind::all() {
            for sheet in kind.sheets() {
                assert!(sheet.name.chars().count() <= 31, "'{}' too long", sheet.name);
            }
        }
    }
}
