//! Download filename slugging.

/// Lower-cases a project title and collapses whitespace runs into single
/// hyphens, e.g. `"Sales Performance Dashboard"` becomes
/// `"sales-performance-dashboard"`.
///
/// Leading and trailing whitespace is dropped rather than turned into
/// dangling hyphens.
pub fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_titles() {
        assert_eq!(slug("Sales Performance Dashboard"), "sales-performance-dashboard");
        assert_eq!(slug("Business Intelligence Dashboard"), "business-intelligence-dashboard");
        assert_eq!(slug("E-commerce Analytics Report"), "e-commerce-analytics-report");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slug("  Patient   Data\tValidation "), "patient-data-validation");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("   "), "");
    }

    proptest! {
        #[test]
        fn prop_no_uppercase_or_whitespace(title in "[ a-zA-Z0-9-]{0,64}") {
            let s = slug(&title);
            prop_assert!(!s.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert!(!s.chars().any(char::is_whitespace));
        }

        #[test]
        fn prop_idempotent(title in "[ a-zA-Z0-9-]{0,64}") {
            let once = slug(&title);
            prop_assert_eq!(slug(&once), once);
        }
    }
}
