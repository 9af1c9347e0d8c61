/// Route module for the typed-route compiler
///
/// Contains the pure functional pieces that turn a route pattern into
/// concrete routes:
/// - `pattern` - segment grammar and dynamic placeholders
/// - `expand` - alternative-group expansion

pub mod expand;
pub mod pattern;

// Re-export commonly used types
pub use expand::extrapolate_group_routes;
pub use pattern::{classify_segment, dynamic_segments, DynamicSegment, SegmentKind};
