//! Patient Data Validation Project sample data.

use crate::catalog::types::Record;
use crate::catalog::types::Value::{Float, Int, Text};

pub static VALIDATION_RESULTS: &[Record] = &[
    &[("category", Text("Demographics")), ("total", Int(50_000)), ("valid", Int(49_850)), ("errors", Int(150))],
    &[("category", Text("Medical History")), ("total", Int(48_000)), ("valid", Int(47_750)), ("errors", Int(250))],
    &[("category", Text("Prescriptions")), ("total", Int(125_000)), ("valid", Int(124_500)), ("errors", Int(500))],
    &[("category", Text("Lab Results")), ("total", Int(180_000)), ("valid", Int(179_200)), ("errors", Int(800))],
];

pub static ERROR_TYPES: &[Record] = &[
    &[("type", Text("Missing Fields")), ("count", Int(450)), ("severity", Text("Medium"))],
    &[("type", Text("Format Errors")), ("count", Int(320)), ("severity", Text("Low"))],
    &[("type", Text("Duplicate Records")), ("count", Int(180)), ("severity", Text("High"))],
    &[("type", Text("Invalid References")), ("count", Int(150)), ("severity", Text("High"))],
    &[("type", Text("Date Discrepancies")), ("count", Int(100)), ("severity", Text("Medium"))],
];

pub static MIGRATION_TIMELINE: &[Record] = &[
    &[("phase", Text("Extraction")), ("status", Text("Complete")), ("records", Int(403_000))],
    &[("phase", Text("Transformation")), ("status", Text("Complete")), ("records", Int(403_000))],
    &[("phase", Text("Validation")), ("status", Text("Complete")), ("records", Int(401_300))],
    &[("phase", Text("Loading")), ("status", Text("Complete")), ("records", Int(401_300))],
    &[("phase", Text("Verification")), ("status", Text("Complete")), ("records", Int(401_300))],
];

pub static FIELD_ACCURACY: &[Record] = &[
    &[("field", Text("Patient ID")), ("accuracy", Int(100))],
    &[("field", Text("Name")), ("accuracy", Float(99.9))],
    &[("field", Text("DOB")), ("accuracy", Float(99.7))],
    &[("field", Text("Medical Record #")), ("accuracy", Float(99.8))],
    &[("field", Text("Insurance Info")), ("accuracy", Float(99.5))],
];
