//! Patient Data Monitoring Dashboard sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Float, Int, Text};

/// Quality metrics for the overview sheet. The status field carries the
/// met/below-target label derived from comparing value against target.
pub static QUALITY_METRICS: &[Record] = &[
    &[("metric", Text("Accuracy Rate")), ("value", Float(99.8)), ("target", Float(99.5)), ("status", Text("✓ Met"))],
    &[("metric", Text("Completeness")), ("value", Float(98.5)), ("target", Float(98.0)), ("status", Text("✓ Met"))],
    &[("metric", Text("Timeliness")), ("value", Float(96.2)), ("target", Float(95.0)), ("status", Text("✓ Met"))],
    &[("metric", Text("Consistency")), ("value", Float(99.1)), ("target", Float(98.5)), ("status", Text("✓ Met"))],
];

pub static VALIDATION_PROGRESS: &[Record] = &[
    &[("day", Text("Mon")), ("validated", Int(2_500)), ("pending", Int(1_200))],
    &[("day", Text("Tue")), ("validated", Int(3_200)), ("pending", Int(800))],
    &[("day", Text("Wed")), ("validated", Int(2_800)), ("pending", Int(950))],
    &[("day", Text("Thu")), ("validated", Int(3_500)), ("pending", Int(600))],
    &[("day", Text("Fri")), ("validated", Int(4_200)), ("pending", Int(400))],
];

pub static TEAM_PERFORMANCE: &[Record] = &[
    &[("team", Text("Team A")), ("recordsValidated", Int(12_500)), ("accuracy", Float(99.9))],
    &[("team", Text("Team B")), ("recordsValidated", Int(11_800)), ("accuracy", Float(99.7))],
    &[("team", Text("Team C")), ("recordsValidated", Int(13_200)), ("accuracy", Float(99.8))],
    &[("team", Text("Team D")), ("recordsValidated", Int(12_500)), ("accuracy", Float(99.6))],
];

/// Manual reporting hours before and after automation. The saved field is
/// pre-computed as before minus after.
pub static REPORTING_HOURS: &[Record] = &[
    &[("task", Text("Manual Reports")), ("before", Int(12)), ("after", Int(4)), ("saved", Int(8))],
    &[("task", Text("Data Entry")), ("before", Int(8)), ("after", Int(2)), ("saved", Int(6))],
    &[("task", Text("Error Checking")), ("before", Int(6)), ("after", Int(2)), ("saved", Int(4))],
    &[("task", Text("Stakeholder Updates")), ("before", Int(4)), ("after", Int(2)), ("saved", Int(2))],
];
