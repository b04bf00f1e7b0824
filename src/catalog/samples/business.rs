//! Business Intelligence Dashboard sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Float, Int, Text};

/// Operational metrics shown on the overview sheet. Trend labels are stored
/// in the upper-cased display form.
pub static OPERATIONAL_METRICS: &[Record] = &[
    &[("metric", Text("On-time Delivery")), ("current", Int(94)), ("target", Int(95)), ("trend", Text("UP"))],
    &[("metric", Text("Customer Satisfaction")), ("current", Float(4.2)), ("target", Float(4.5)), ("trend", Text("UP"))],
    &[("metric", Text("Employee Productivity")), ("current", Int(87)), ("target", Int(85)), ("trend", Text("UP"))],
    &[("metric", Text("Process Efficiency")), ("current", Int(82)), ("target", Int(80)), ("trend", Text("STABLE"))],
];

pub static DEPARTMENT_KPIS: &[Record] = &[
    &[("dept", Text("Sales")), ("budget", Int(500_000)), ("actual", Int(485_000)), ("efficiency", Int(97))],
    &[("dept", Text("Marketing")), ("budget", Int(350_000)), ("actual", Int(320_000)), ("efficiency", Int(109))],
    &[("dept", Text("Operations")), ("budget", Int(420_000)), ("actual", Int(395_000)), ("efficiency", Int(106))],
    &[("dept", Text("HR")), ("budget", Int(180_000)), ("actual", Int(175_000)), ("efficiency", Int(103))],
    &[("dept", Text("IT")), ("budget", Int(280_000)), ("actual", Int(265_000)), ("efficiency", Int(106))],
];

pub static FINANCIAL_METRICS: &[Record] = &[
    &[("quarter", Text("Q1")), ("revenue", Float(2.4)), ("expenses", Float(1.8)), ("profit", Float(0.6))],
    &[("quarter", Text("Q2")), ("revenue", Float(2.8)), ("expenses", Float(2.0)), ("profit", Float(0.8))],
    &[("quarter", Text("Q3")), ("revenue", Float(3.1)), ("expenses", Float(2.2)), ("profit", Float(0.9))],
    &[("quarter", Text("Q4")), ("revenue", Float(3.5)), ("expenses", Float(2.4)), ("profit", Float(1.1))],
];
