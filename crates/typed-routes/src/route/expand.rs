//! Alternative-group expansion
//!
//! A group segment is optional: it is either elided or present as one of
//! its names. Eliding a group also elides every group after it, so inner
//! alternatives are only reachable once the outer group has been chosen.

use std::collections::BTreeSet;

use super::pattern::{classify_segment, has_groups, SegmentKind};

/// Expands a pattern into the set of concrete paths its groups denote
///
/// Leftmost group first:
///
/// - **elision**: everything before the group, followed by the plain
///   segments after it (later groups are elided too)
/// - **choice**: for each name `n`, the prefix, `(n)`, then every expansion
///   of the remainder
///
/// # Examples
///
/// ```
/// use typed_routes::route::expand::extrapolate_group_routes;
///
/// let routes = extrapolate_group_routes("/(group)/page");
/// assert!(routes.contains("/page"));
/// assert!(routes.contains("/(group)/page"));
/// assert_eq!(routes.len(), 2);
///
/// // 1 + 3 * (1 + 2)
/// let routes = extrapolate_group_routes("/test/(group1,group2,group3)/(test1,test2)");
/// assert_eq!(routes.len(), 10);
/// ```
pub fn extrapolate_group_routes(pattern: &str) -> BTreeSet<String> {
    if !has_groups(pattern) {
        return BTreeSet::from([pattern.to_string()]);
    }

    let segments: Vec<&str> = pattern.strip_prefix('/').unwrap_or(pattern).split('/').collect();

    expand_segments(&segments)
        .into_iter()
        .map(|variant| format!("/{}", variant.join("/")))
        .collect()
}

/// Recursive worker over path segments
///
/// Returns each variant as a segment list; an empty remainder yields one
/// empty variant so that the caller's prefix terminates there.
fn expand_segments(segments: &[&str]) -> Vec<Vec<String>> {
    let Some((index, names)) = leftmost_group(segments) else {
        return vec![segments.iter().map(|s| s.to_string()).collect()];
    };

    let prefix = &segments[..index];
    let remainder = &segments[index + 1..];

    let elided: Vec<String> = prefix
        .iter()
        .map(|s| s.to_string())
        .chain(
            remainder
                .iter()
                .filter(|s| !matches!(classify_segment(s), SegmentKind::Group(_)))
                .map(|s| s.to_string()),
        )
        .collect();

    let suffixes = expand_segments(remainder);

    let chosen = names.iter().flat_map(|name| {
        suffixes.iter().map(move |suffix| {
            prefix
                .iter()
                .map(|s| s.to_string())
                .chain(std::iter::once(format!("({})", name)))
                .chain(suffix.iter().cloned())
                .collect::<Vec<String>>()
        })
    });

    std::iter::once(elided).chain(chosen).collect()
}

/// Position and names of the first group segment, if any
fn leftmost_group(segments: &[&str]) -> Option<(usize, Vec<String>)> {
    segments
        .iter()
        .enumerate()
        .find_map(|(index, segment)| match classify_segment(segment) {
            SegmentKind::Group(names) => Some((index, names)),
            _ => None,
        })
}
