//! Common types for the static project catalog.

/// A single cell value in a sample dataset.
///
/// All values are borrowed from static data, so `Value` is `Copy` and an
/// export just replicates values into the transient document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Text value
    Text(&'static str),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
}

/// One uniformly-shaped sample record: ordered field name/value pairs.
pub type Record = &'static [(&'static str, Value)];

/// Looks up a field by name within a record.
pub fn field(record: Record, name: &str) -> Option<&'static Value> {
    record.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
}

/// The numeric highlight shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// Icon token understood by the host UI
    pub icon: &'static str,
    /// Headline value, e.g. `"25%"`
    pub value: &'static str,
    /// Caption under the value
    pub label: &'static str,
}

/// One static case-study entry in the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Unique short identifier, e.g. `"sales-performance-dashboard"`
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Descriptive text
    pub description: &'static str,
    /// Tool names used in the case study
    pub tools: &'static [&'static str],
    /// Icon token understood by the host UI
    pub icon: &'static str,
    /// Color theme token understood by the host UI
    pub color: &'static str,
    /// Key insight strings
    pub insights: &'static [&'static str],
    /// Numeric highlight
    pub highlight: Highlight,
}

impl Project {
    /// Whether the case study's tool list includes Power BI.
    ///
    /// Exports for Power BI projects get a `-powerbi-data` filename suffix.
    pub fn uses_power_bi(&self) -> bool {
        self.tools.contains(&"Power BI")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        static RECORD: Record = &[("region", Value::Text("North")), ("revenue", Value::Int(245_000))];
        assert_eq!(field(RECORD, "region"), Some(&Value::Text("North")));
        assert_eq!(field(RECORD, "revenue"), Some(&Value::Int(245_000)));
        assert_eq!(field(RECORD, "target"), None);
    }
}
