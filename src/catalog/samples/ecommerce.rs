//! E-commerce Analytics Report sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Int, Text};

pub static CONVERSION_FUNNEL: &[Record] = &[
    &[("stage", Text("Visitors")), ("count", Int(50_000)), ("rate", Int(100))],
    &[("stage", Text("Product Views")), ("count", Int(35_000)), ("rate", Int(70))],
    &[("stage", Text("Add to Cart")), ("count", Int(12_000)), ("rate", Int(24))],
    &[("stage", Text("Checkout")), ("count", Int(8_000)), ("rate", Int(16))],
    &[("stage", Text("Purchase")), ("count", Int(5_000)), ("rate", Int(10))],
];

pub static CUSTOMER_JOURNEY: &[Record] = &[
    &[("touchpoint", Text("Social Media")), ("percentage", Int(35))],
    &[("touchpoint", Text("Search Engine")), ("percentage", Int(28))],
    &[("touchpoint", Text("Email")), ("percentage", Int(18))],
    &[("touchpoint", Text("Direct")), ("percentage", Int(12))],
    &[("touchpoint", Text("Referral")), ("percentage", Int(7))],
];

pub static REVENUE_BY_CATEGORY: &[Record] = &[
    &[("category", Text("Electronics")), ("revenue", Int(125_000)), ("orders", Int(2_500))],
    &[("category", Text("Clothing")), ("revenue", Int(98_000)), ("orders", Int(4_200))],
    &[("category", Text("Home & Garden")), ("revenue", Int(75_000)), ("orders", Int(1_800))],
    &[("category", Text("Sports")), ("revenue", Int(52_000)), ("orders", Int(1_300))],
    &[("category", Text("Books")), ("revenue", Int(28_000)), ("orders", Int(3_500))],
];
