//! Customer Behavior Analysis sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Int, Text};

pub static CUSTOMER_SEGMENTS: &[Record] = &[
    &[("segment", Text("High Value")), ("count", Int(1_250)), ("avgSpend", Int(2_500)), ("churnRisk", Int(5))],
    &[("segment", Text("Regular")), ("count", Int(4_500)), ("avgSpend", Int(850)), ("churnRisk", Int(15))],
    &[("segment", Text("Occasional")), ("count", Int(3_200)), ("avgSpend", Int(320)), ("churnRisk", Int(35))],
    &[("segment", Text("At-Risk")), ("count", Int(1_050)), ("avgSpend", Int(180)), ("churnRisk", Int(65))],
];

pub static PURCHASE_PATTERNS: &[Record] = &[
    &[("dayOfWeek", Text("Mon")), ("orders", Int(1_200)), ("avgValue", Int(145))],
    &[("dayOfWeek", Text("Tue")), ("orders", Int(1_350)), ("avgValue", Int(138))],
    &[("dayOfWeek", Text("Wed")), ("orders", Int(1_180)), ("avgValue", Int(152))],
    &[("dayOfWeek", Text("Thu")), ("orders", Int(1_420)), ("avgValue", Int(165))],
    &[("dayOfWeek", Text("Fri")), ("orders", Int(1_680)), ("avgValue", Int(178))],
    &[("dayOfWeek", Text("Sat")), ("orders", Int(2_100)), ("avgValue", Int(195))],
    &[("dayOfWeek", Text("Sun")), ("orders", Int(1_850)), ("avgValue", Int(172))],
];

pub static LIFETIME_VALUE: &[Record] = &[
    &[("cohort", Text("Q1 2023")), ("ltv", Int(1_250)), ("retention", Int(82))],
    &[("cohort", Text("Q2 2023")), ("ltv", Int(1_180)), ("retention", Int(78))],
    &[("cohort", Text("Q3 2023")), ("ltv", Int(1_320)), ("retention", Int(85))],
    &[("cohort", Text("Q4 2023")), ("ltv", Int(1_450)), ("retention", Int(88))],
];

/// Free-text SQL used in the analysis; rendered as a query-log sheet.
pub static SQL_QUERIES: &[&str] = &[
    "WITH customer_segments AS (\n  SELECT customer_id,\n    SUM(order_total) as total_spent,\n    COUNT(*) as order_count\n  FROM orders\n  GROUP BY customer_id\n)",
    "SELECT segment,\n  AVG(total_spent) as avg_spend,\n  COUNT(*) as customer_count\nFROM customer_segments\nGROUP BY segment",
];
