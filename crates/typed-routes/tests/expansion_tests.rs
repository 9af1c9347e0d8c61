//! Group expansion properties
//!
//! Checks the size of the expansion for single and sequential groups and
//! that the plain segments of a pattern survive every variant.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;
use typed_routes::extrapolate_group_routes;

fn group(prefix: &str, size: usize) -> String {
    let names: Vec<String> = (0..size).map(|i| format!("{prefix}{i}")).collect();
    format!("({})", names.join(","))
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Cardinality
// ============================================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
fn test_single_group_yields_k_plus_one(#[case] k: usize) {
    let pattern = format!("/{}/page", group("g", k));
    assert_eq!(extrapolate_group_routes(&pattern).len(), k + 1);
}

#[rstest]
#[case(1, 1)]
#[case(1, 3)]
#[case(2, 2)]
#[case(3, 2)]
#[case(4, 1)]
fn test_sequential_groups_yield_one_plus_k_times_one_plus_m(#[case] k: usize, #[case] m: usize) {
    let pattern = format!("/{}/{}", group("a", k), group("b", m));
    assert_eq!(extrapolate_group_routes(&pattern).len(), 1 + k * (1 + m));
}

#[rstest]
#[case("/about")]
#[case("/")]
#[case("/users/[id]")]
#[case("/docs/[...slug]")]
#[case("/settings/")]
fn test_patterns_without_groups_are_unchanged(#[case] pattern: &str) {
    assert_eq!(extrapolate_group_routes(pattern), set(&[pattern]));
}

// ============================================================================
// Shape
// ============================================================================

#[rstest]
#[case("/(g)/home", "home")]
#[case("/shop/(a,b)/cart", "cart")]
#[case("/(x,y)/(z)/[id]", "[id]")]
fn test_last_plain_segment_survives(#[case] pattern: &str, #[case] last: &str) {
    for route in extrapolate_group_routes(pattern) {
        assert!(route.ends_with(last), "{route}");
    }
}

#[test]
fn test_no_variant_contains_an_unexpanded_alternative() {
    for route in extrapolate_group_routes("/(a,b,c)/mid/(d,e)/end") {
        assert!(!route.contains(','), "{route}");
    }
}
