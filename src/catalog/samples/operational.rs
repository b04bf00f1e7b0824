//! Operational Efficiency Analysis sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Int, Text};

pub static PROCESS_METRICS: &[Record] = &[
    &[("process", Text("Order Processing")), ("before", Int(45)), ("after", Int(32)), ("improvement", Int(29))],
    &[("process", Text("Inventory Mgmt")), ("before", Int(38)), ("after", Int(28)), ("improvement", Int(26))],
    &[("process", Text("Quality Check")), ("before", Int(25)), ("after", Int(20)), ("improvement", Int(20))],
    &[("process", Text("Shipping Prep")), ("before", Int(52)), ("after", Int(42)), ("improvement", Int(19))],
];

pub static RESOURCE_UTILIZATION: &[Record] = &[
    &[("resource", Text("Warehouse Staff")), ("utilization", Int(85)), ("optimal", Int(90))],
    &[("resource", Text("Machinery")), ("utilization", Int(78)), ("optimal", Int(85))],
    &[("resource", Text("Transport Fleet")), ("utilization", Int(72)), ("optimal", Int(80))],
    &[("resource", Text("IT Systems")), ("utilization", Int(65)), ("optimal", Int(75))],
];

pub static WEEKLY_TREND: &[Record] = &[
    &[("week", Text("W1")), ("efficiency", Int(78)), ("target", Int(85))],
    &[("week", Text("W2")), ("efficiency", Int(82)), ("target", Int(85))],
    &[("week", Text("W3")), ("efficiency", Int(85)), ("target", Int(85))],
    &[("week", Text("W4")), ("efficiency", Int(88)), ("target", Int(85))],
    &[("week", Text("W5")), ("efficiency", Int(91)), ("target", Int(85))],
    &[("week", Text("W6")), ("efficiency", Int(93)), ("target", Int(85))],
];

/// Free-text SQL used in the analysis; rendered as a query-log sheet.
pub static SQL_QUERIES: &[&str] = &[
    "SELECT process_name,\n  AVG(completion_time) as avg_time,\n  COUNT(*) as total_tasks\nFROM operations_log\nWHERE date >= '2024-01-01'\nGROUP BY process_name",
];
