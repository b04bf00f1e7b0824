//! Sales Performance Dashboard sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Int, Text};

/// Headline KPIs. The status field carries the direction arrow derived from
/// the sign of the change.
pub static KPIS: &[Record] = &[
    &[
        ("label", Text("Total Revenue")),
        ("value", Text("$944K")),
        ("change", Text("+12.5%")),
        ("status", Text("↑ Positive")),
    ],
    &[
        ("label", Text("Avg Order Value")),
        ("value", Text("$285")),
        ("change", Text("+8.2%")),
        ("status", Text("↑ Positive")),
    ],
    &[
        ("label", Text("Customer Retention")),
        ("value", Text("78%")),
        ("change", Text("+5.1%")),
        ("status", Text("↑ Positive")),
    ],
    &[
        ("label", Text("New Customers")),
        ("value", Text("1,245")),
        ("change", Text("+22.3%")),
        ("status", Text("↑ Positive")),
    ],
];

pub static SALES_BY_REGION: &[Record] = &[
    &[("region", Text("North")), ("revenue", Int(245_000)), ("target", Int(220_000)), ("growth", Int(12))],
    &[("region", Text("South")), ("revenue", Int(189_000)), ("target", Int(200_000)), ("growth", Int(-5))],
    &[("region", Text("East")), ("revenue", Int(312_000)), ("target", Int(280_000)), ("growth", Int(18))],
    &[("region", Text("West")), ("revenue", Int(198_000)), ("target", Int(190_000)), ("growth", Int(8))],
];

pub static MONTHLY_TREND: &[Record] = &[
    &[("month", Text("Jan")), ("revenue", Int(85_000)), ("forecast", Int(82_000))],
    &[("month", Text("Feb")), ("revenue", Int(92_000)), ("forecast", Int(88_000))],
    &[("month", Text("Mar")), ("revenue", Int(78_000)), ("forecast", Int(85_000))],
    &[("month", Text("Apr")), ("revenue", Int(105_000)), ("forecast", Int(95_000))],
    &[("month", Text("May")), ("revenue", Int(112_000)), ("forecast", Int(105_000))],
    &[("month", Text("Jun")), ("revenue", Int(128_000)), ("forecast", Int(115_000))],
];

pub static TOP_PRODUCTS: &[Record] = &[
    &[("name", Text("Product A")), ("sales", Int(45_000)), ("units", Int(1_200))],
    &[("name", Text("Product B")), ("sales", Int(38_000)), ("units", Int(950))],
    &[("name", Text("Product C")), ("sales", Int(32_000)), ("units", Int(800))],
    &[("name", Text("Product D")), ("sales", Int(28_000)), ("units", Int(720))],
    &[("name", Text("Product E")), ("sales", Int(22_000)), ("units", Int(550))],
];
