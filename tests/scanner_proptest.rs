//! Property-based tests for both scanners
//!
//! The scanners must never panic on arbitrary input, the data/raw invariant
//! must hold unconditionally, and a successful extraction must be a fixed
//! point of re-extraction.

use proptest::prelude::*;
use snipsmart::snip::{snip_by_tag, snip_json, snip_smart, SnipOutcome, TagOptions};

fn invariant_holds(outcome: &SnipOutcome) -> bool {
    match outcome {
        SnipOutcome::Success { .. } => outcome.data().is_some() && outcome.raw().is_none(),
        SnipOutcome::Fail { comments, .. } => !comments.is_empty() && outcome.data().is_none(),
    }
}

proptest! {
    #[test]
    fn tag_scanner_never_panics(input in ".*", case_sensitive in any::<bool>()) {
        let outcome = snip_by_tag(&input, &TagOptions { case_sensitive });
        prop_assert!(invariant_holds(&outcome));
    }

    #[test]
    fn json_scanner_never_panics(input in ".*") {
        let outcome = snip_json(&input);
        prop_assert!(invariant_holds(&outcome));
    }

    #[test]
    fn dispatch_never_panics(input in ".*", format in ".{0,8}") {
        let outcome = snip_smart(&input, &format);
        prop_assert!(invariant_holds(&outcome));
    }

    #[test]
    fn tag_success_is_a_fixed_point(input in ".*") {
        if let Some(data) = snip_by_tag(&input, &TagOptions::default()).data() {
            let again = snip_by_tag(data, &TagOptions::default());
            prop_assert_eq!(again.data(), Some(data));
        }
    }

    #[test]
    fn json_success_is_a_fixed_point(input in ".*") {
        if let Some(data) = snip_json(&input).data() {
            let again = snip_json(data);
            prop_assert_eq!(again.data(), Some(data));
        }
    }

    #[test]
    fn tag_data_is_a_substring_starting_at_a_delimiter(input in ".*") {
        if let Some(data) = snip_by_tag(&input, &TagOptions::default()).data() {
            prop_assert!(input.contains(data));
            prop_assert!(data.starts_with('<'));
        }
    }

    #[test]
    fn prose_wrapped_element_extracts_exactly(
        before in "[^<>]{0,40}",
        name in "[a-z][a-z0-9]{0,7}",
        inner in "[^<>]{0,40}",
        after in "[^<>]{0,40}",
    ) {
        let element = format!("<{name}>{inner}</{name}>");
        let input = format!("{before}{element}{after}");
        let outcome = snip_by_tag(&input, &TagOptions::default());
        prop_assert_eq!(outcome.data(), Some(element.as_str()));
    }

    #[test]
    fn prose_wrapped_value_extracts_exactly(
        before in "[^{}\\[\\]\"]{0,40}",
        key in "[a-z]{1,8}",
        value in 0i64..10_000,
        after in "[^{}\\[\\]\"]{0,40}",
    ) {
        let fragment = format!("{{\"{key}\": {value}}}");
        let input = format!("{before}{fragment}{after}");
        let outcome = snip_json(&input);
        prop_assert_eq!(outcome.data(), Some(fragment.as_str()));
    }

    #[test]
    fn json_success_parses(input in ".*") {
        if let Some(data) = snip_json(&input).data() {
            prop_assert!(serde_json::from_str::<serde_json::Value>(data).is_ok());
        }
    }
}
