//! Tests for AttributeMatcher

use std::collections::HashSet;

use attrcheck::core::models::{attribute, attribute_with_any_value};

mod equality {
    use super::*;

    #[test]
    fn same_name_different_values_are_equal() {
        assert_eq!(attribute("a", "1"), attribute("a", "2"));
    }

    #[test]
    fn same_name_exact_and_wildcard_are_equal() {
        assert_eq!(attribute("a", "1"), attribute_with_any_value("a"));
    }

    #[test]
    fn different_names_are_not_equal() {
        assert_ne!(attribute("a", "1"), attribute("b", "1"));
    }

    #[test]
    fn hash_set_treats_same_name_as_same_key() {
        let set: HashSet<_> =
            [attribute("a", "1"), attribute("a", "2"), attribute_with_any_value("a")]
                .into_iter()
                .collect();
        assert_eq!(set.len(), 1);
    }
}

mod matching {
    use super::*;

    #[test]
    fn wildcard_matches_any_value() {
        let m = attribute_with_any_value("x");
        assert!(m.matches("anything"));
        assert!(m.matches(""));
    }

    #[test]
    fn exact_matches_only_its_value() {
        let m = attribute("x", "5");
        assert!(m.matches("5"));
        assert!(!m.matches("05"));
        assert!(!m.matches("5 "));
    }

    #[test]
    fn exact_is_case_sensitive() {
        let m = attribute("area", "heap");
        assert!(!m.matches("Heap"));
    }

    #[test]
    fn exact_empty_value_matches_empty_only() {
        let m = attribute("x", "");
        assert!(m.matches(""));
        assert!(!m.matches("0"));
    }
}

mod accessors {
    use super::*;

    #[test]
    fn name_and_value() {
        let m = attribute("pool", "Metaspace");
        assert_eq!(m.name(), "pool");
        assert_eq!(m.expected_value(), Some("Metaspace"));
        assert!(!m.is_wildcard());

        let any = attribute_with_any_value("pool");
        assert_eq!(any.expected_value(), None);
        assert!(any.is_wildcard());
    }

    #[test]
    fn display() {
        assert_eq!(attribute("pool", "Metaspace").to_string(), "{pool=Metaspace}");
        assert_eq!(attribute_with_any_value("pool").to_string(), "{pool}");
    }
}
