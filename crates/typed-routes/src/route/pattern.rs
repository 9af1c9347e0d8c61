/// Pattern grammar for route segments
///
/// Recognizes the four constructs a route pattern can contain: plain
/// segments, dynamic segments `[name]`, catch-all segments `[...name]` and
/// alternative groups `(a,b,c)`.
/// All functions are **pure**: same input → same output, no side effects.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `[id]` and `[...slug]` - captures the optional `...` and the bare name
pub static DYNAMIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\.{3})?([^\[\]/]+)\]").unwrap());

/// Any non-empty bracket token, regardless of kind
pub static BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\[\]/]+\]").unwrap());

/// A whole `(a,b,c)` segment - captures the inner name list
pub static GROUP_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([^(),/\s]+(?:,[^(),/\s]+)*)\)$").unwrap());

/// One name inside a group's inner text
static GROUP_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^,]+").unwrap());

/// Represents the different kinds of route pattern segments
///
/// Functional sum type for pattern matching route segments.
///
/// # Examples
///
/// ```
/// use typed_routes::route::pattern::{classify_segment, SegmentKind};
///
/// assert!(matches!(classify_segment("about"), SegmentKind::Static(_)));
/// assert!(matches!(classify_segment("[id]"), SegmentKind::Dynamic(_)));
/// assert!(matches!(classify_segment("[...slug]"), SegmentKind::CatchAll(_)));
/// assert!(matches!(classify_segment("(app,admin)"), SegmentKind::Group(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Catch-all segment: [...slug]
    CatchAll(String),
    /// Single dynamic segment: [id]
    Dynamic(String),
    /// Alternative group: (a) or (a,b,c), names in declaration order
    Group(Vec<String>),
    /// Static text segment, including anything the grammar does not recognize
    Static(String),
}

/// Classifies a segment into a pattern kind (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Group**: the whole segment is `(n1,n2,...)`
/// 2. **Catch-all**: the whole segment is `[...name]`
/// 3. **Dynamic**: the whole segment is `[name]`
/// 4. **Static**: any other text, passed through literally
///
/// Malformed shapes such as `(a,,b)`, `(a b)` or `[x` fall through to
/// `Static`, so one bad segment never poisons a whole route.
///
/// The kind describes the segment's whole shape. A token embedded in
/// other text, as in `post-[id]`, leaves the segment `Static`, yet the
/// route is still dynamic: [`has_dynamic_segments`] and
/// [`to_dynamic_template`] work on tokens wherever they appear.
pub fn classify_segment(segment: &str) -> SegmentKind {
    if let Some(caps) = GROUP_SEGMENT.captures(segment) {
        return SegmentKind::Group(group_names(&caps[1]));
    }

    match DYNAMIC_SEGMENT.captures(segment) {
        Some(caps) if caps.get(0).map(|m| m.as_str()) == Some(segment) => {
            match DynamicSegment::from_captures(&caps) {
                DynamicSegment::CatchAll(name) => SegmentKind::CatchAll(name),
                DynamicSegment::Single(name) => SegmentKind::Dynamic(name),
            }
        }
        _ => SegmentKind::Static(segment.to_string()),
    }
}

/// Splits the inner text of a group segment into its ordered names
///
/// ```
/// use typed_routes::route::pattern::group_names;
///
/// assert_eq!(group_names("app,admin"), vec!["app", "admin"]);
/// ```
pub fn group_names(inner: &str) -> Vec<String> {
    GROUP_NAME
        .find_iter(inner)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A dynamic token inside a route pattern
///
/// Owns the choice of type placeholder, so nothing downstream has to sniff
/// placeholder syntax out of rendered strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicSegment {
    /// `[name]` - exactly one path segment
    Single(String),
    /// `[...name]` - one or more path segments
    CatchAll(String),
}

impl DynamicSegment {
    /// Placeholder for one segment value in a template-literal type
    pub const SINGLE_PLACEHOLDER: &'static str = "${SingleRoutePart<T>}";
    /// Placeholder for a rest value in a template-literal type
    pub const CATCH_ALL_PLACEHOLDER: &'static str = "${CatchAllRoutePart<T>}";

    fn from_captures(caps: &Captures<'_>) -> Self {
        let name = caps[2].to_string();
        if caps.get(1).is_some() {
            DynamicSegment::CatchAll(name)
        } else {
            DynamicSegment::Single(name)
        }
    }

    /// Bare parameter name, without brackets or `...`
    pub fn name(&self) -> &str {
        match self {
            DynamicSegment::Single(name) | DynamicSegment::CatchAll(name) => name,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DynamicSegment::Single(_) => Self::SINGLE_PLACEHOLDER,
            DynamicSegment::CatchAll(_) => Self::CATCH_ALL_PLACEHOLDER,
        }
    }
}

/// All dynamic tokens of a pattern, left to right
///
/// ```
/// use typed_routes::route::pattern::{dynamic_segments, DynamicSegment};
///
/// let segments = dynamic_segments("/shop/[category]/[...rest]");
/// assert_eq!(
///     segments,
///     vec![
///         DynamicSegment::Single("category".to_string()),
///         DynamicSegment::CatchAll("rest".to_string()),
///     ]
/// );
/// ```
pub fn dynamic_segments(pattern: &str) -> Vec<DynamicSegment> {
    DYNAMIC_SEGMENT
        .captures_iter(pattern)
        .map(|caps| DynamicSegment::from_captures(&caps))
        .collect()
}

/// Whether the pattern has at least one bracket token
///
/// Embedded tokens count: `/post-[id]` is dynamic.
pub fn has_dynamic_segments(pattern: &str) -> bool {
    BRACKET.is_match(pattern)
}

/// Whether any segment of the pattern is a group
pub fn has_groups(pattern: &str) -> bool {
    pattern.split('/').any(|segment| GROUP_SEGMENT.is_match(segment))
}

/// Replaces every dynamic token with its typed placeholder
///
/// Tokens embedded in a segment are replaced in place.
///
/// ```
/// use typed_routes::route::pattern::to_dynamic_template;
///
/// assert_eq!(
///     to_dynamic_template("/docs/[...slug]"),
///     "/docs/${CatchAllRoutePart<T>}"
/// );
/// assert_eq!(to_dynamic_template("/post-[id]"), "/post-${SingleRoutePart<T>}");
/// ```
pub fn to_dynamic_template(route: &str) -> String {
    DYNAMIC_SEGMENT
        .replace_all(route, |caps: &Captures<'_>| {
            DynamicSegment::from_captures(caps).placeholder()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        let seg = classify_segment("about");
        assert_eq!(seg, SegmentKind::Static("about".to_string()));
    }

    #[test]
    fn test_classify_dynamic() {
        let seg = classify_segment("[id]");
        assert_eq!(seg, SegmentKind::Dynamic("id".to_string()));
    }

    #[test]
    fn test_classify_catch_all() {
        let seg = classify_segment("[...slug]");
        assert_eq!(seg, SegmentKind::CatchAll("slug".to_string()));
    }

    #[test]
    fn test_classify_single_group() {
        let seg = classify_segment("(tabs)");
        assert_eq!(seg, SegmentKind::Group(vec!["tabs".to_string()]));
    }

    #[test]
    fn test_classify_alternative_group() {
        let seg = classify_segment("(home,search,profile)");
        assert_eq!(
            seg,
            SegmentKind::Group(vec![
                "home".to_string(),
                "search".to_string(),
                "profile".to_string()
            ])
        );
    }

    #[test]
    fn test_classify_malformed_falls_back_to_static() {
        for segment in ["(a,,b)", "(a, b)", "()", "(open", "[", "[]", "[x", "x]"] {
            assert_eq!(
                classify_segment(segment),
                SegmentKind::Static(segment.to_string()),
                "segment {segment:?}"
            );
        }
    }

    #[test]
    fn test_classify_embedded_bracket_is_static() {
        // Only a whole-segment token changes the segment kind
        let seg = classify_segment("post-[id]");
        assert_eq!(seg, SegmentKind::Static("post-[id]".to_string()));
    }

    #[test]
    fn test_embedded_bracket_makes_route_dynamic() {
        assert!(has_dynamic_segments("/blog/post-[id]"));
        assert_eq!(
            dynamic_segments("/blog/post-[id]"),
            vec![DynamicSegment::Single("id".to_string())]
        );
        assert_eq!(
            to_dynamic_template("/blog/post-[id]"),
            "/blog/post-${SingleRoutePart<T>}"
        );
    }

    #[test]
    fn test_dynamic_segments_order() {
        let segments = dynamic_segments("/test/[...param1]/[param2]/[param3]");
        let names: Vec<&str> = segments.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["param1", "param2", "param3"]);
        assert!(matches!(segments[0], DynamicSegment::CatchAll(_)));
        assert!(matches!(segments[1], DynamicSegment::Single(_)));
    }

    #[test]
    fn test_bare_brackets_are_not_dynamic() {
        assert!(dynamic_segments("/list/[]").is_empty());
        assert!(!has_dynamic_segments("/list/[]"));
    }

    #[test]
    fn test_has_groups() {
        assert!(has_groups("/(app)/home"));
        assert!(has_groups("/x/(a,b)/"));
        assert!(!has_groups("/x/(a b)/y"));
        assert!(!has_groups("/plain/route"));
    }

    #[test]
    fn test_to_dynamic_template() {
        assert_eq!(
            to_dynamic_template("/[user]/posts/[...rest]"),
            "/${SingleRoutePart<T>}/posts/${CatchAllRoutePart<T>}"
        );
        assert_eq!(to_dynamic_template("/static"), "/static");
    }
}
