/// Route module for static route tables
///
/// Contains pure functional components for pattern compilation and matching.

pub mod pattern;

// Re-export commonly used types
pub use pattern::{classify_segment, PatternSegmentType, RoutePattern, WILDCARD_PARAM};
