//! Property-based tests for dotted version comparison.
//!
//! Comparison must behave as a strict order over the numeric component
//! tuples, with missing components reading as zero.

use proptest::prelude::*;

use ekill::services::version_compare::is_newer_version;

fn arb_version() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1000, 1..5)
}

fn render(components: &[u64]) -> String {
    components
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Zero-pads both tuples and compares them the way the comparator should.
fn tuple_newer(a: &[u64], b: &[u64]) -> bool {
    let len = a.len().max(b.len());
    for i in 0..len {
        let av = a.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        if av != bv {
            return av > bv;
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // **Property 1: irreflexivity** — no version is newer than itself.
    #[test]
    fn version_never_newer_than_itself(v in arb_version()) {
        let s = render(&v);
        prop_assert!(!is_newer_version(&s, &s));
    }

    // **Property 2: asymmetry** — at most one direction can be "newer".
    #[test]
    fn newer_is_asymmetric(a in arb_version(), b in arb_version()) {
        let (sa, sb) = (render(&a), render(&b));
        prop_assert!(!(is_newer_version(&sa, &sb) && is_newer_version(&sb, &sa)));
    }

    // **Property 3: agreement with numeric tuple order** under zero-padding.
    #[test]
    fn agrees_with_padded_tuple_order(a in arb_version(), b in arb_version()) {
        let (sa, sb) = (render(&a), render(&b));
        prop_assert_eq!(is_newer_version(&sa, &sb), tuple_newer(&a, &b));
    }

    // **Property 4: trailing ".0" is insignificant** on either side.
    #[test]
    fn trailing_zero_suffix_changes_nothing(a in arb_version(), b in arb_version()) {
        let (sa, sb) = (render(&a), render(&b));
        let padded = format!("{}.0", sa);
        prop_assert_eq!(is_newer_version(&padded, &sb), is_newer_version(&sa, &sb));
        prop_assert_eq!(is_newer_version(&sb, &padded), is_newer_version(&sb, &sa));
    }
}
