/// Pattern compilation and matching for route segments
///
/// Pure functional parsing of route pattern strings into typed segments.
/// All functions are **pure**: same input → same output, no side effects.
use crate::error::PatternError;
use crate::params::Params;
use crate::path::decode_segment;

/// Name bound by an unnamed wildcard (`*`)
pub const WILDCARD_PARAM: &str = "*";

/// Represents the different kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use pressroom_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("orders"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment(":id"), PatternSegmentType::Param(_)));
/// assert!(matches!(classify_segment("*"), PatternSegmentType::Wildcard(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Wildcard segment: `*` or `*rest`, matches every remaining segment
    Wildcard(String),
    /// Named parameter: `:id`, matches exactly one segment
    Param(String),
    /// Static text segment
    Static(String),
}

/// Classifies a single pattern segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Wildcard**: `*` (bound as `"*"`) or `*name`
/// 2. **Parameter**: `:name`
/// 3. **Static**: any other text
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if let Some(name) = segment.strip_prefix('*') {
        let name = if name.is_empty() { WILDCARD_PARAM } else { name };
        return PatternSegmentType::Wildcard(name.to_string());
    }

    match segment.strip_prefix(':') {
        Some(name) => PatternSegmentType::Param(name.to_string()),
        None => PatternSegmentType::Static(segment.to_string()),
    }
}

/// A compiled route pattern such as `/single/:id` or `*`
///
/// # Examples
///
/// ```
/// use pressroom_router::RoutePattern;
///
/// let pattern = RoutePattern::parse("/single/:id").unwrap();
/// let params = pattern.matches("/single/42", false).unwrap();
/// assert_eq!(params.get("id"), Some("42"));
///
/// assert!(pattern.matches("/single", false).is_none());
/// assert!(pattern.matches("/single/42/extra", false).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<PatternSegmentType>,
}

impl RoutePattern {
    /// Compiles a pattern string
    ///
    /// The pattern must start with `/`, except for the bare catch-all `*`.
    /// Empty segments are ignored, so `/orders/` and `/orders` compile alike.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        if !pattern.starts_with('/') && !pattern.starts_with('*') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let segments: Vec<PatternSegmentType> = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(classify_segment)
            .collect();

        validate_segments(pattern, &segments)?;

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern exactly as declared
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[PatternSegmentType] {
        &self.segments
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(PatternSegmentType::Wildcard(_)))
    }

    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, PatternSegmentType::Static(_)))
    }

    /// Matching priority, lower is tried first
    ///
    /// # Priority Order
    ///
    /// 1. **Static patterns** → 0
    /// 2. **Parameterized patterns** → param count + depth + 1
    /// 3. **Wildcard patterns** → 2000 - depth, so `/docs/*path` is tried before `*`
    pub fn priority(&self) -> usize {
        let depth = self.segments.len();
        let param_count = self
            .segments
            .iter()
            .filter(|s| matches!(s, PatternSegmentType::Param(_)))
            .count();

        if self.is_wildcard() {
            2000 - depth.min(1000)
        } else if param_count > 0 {
            param_count + depth + 1
        } else {
            0
        }
    }

    /// Parameter-name-independent form used to detect overlapping patterns
    ///
    /// `/single/:id` and `/single/:theid` share the shape `/single/:`.
    pub fn shape(&self, case_insensitive: bool) -> String {
        let shape: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegmentType::Static(text) if case_insensitive => text.to_ascii_lowercase(),
                PatternSegmentType::Static(text) => text.clone(),
                PatternSegmentType::Param(_) => ":".to_string(),
                PatternSegmentType::Wildcard(_) => "*".to_string(),
            })
            .collect();

        format!("/{}", shape.join("/"))
    }

    /// Matches a canonical path against this pattern
    ///
    /// Returns the bound parameters on success. Each path segment is
    /// percent-decoded once, before static comparison and parameter binding;
    /// bound values keep their original case.
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path_segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();

        match_segments(&self.segments, &path_segments, Params::new(), case_insensitive)
    }

    /// Builds a concrete path by substituting parameter values
    ///
    /// Returns `None` if a named parameter is missing. A missing wildcard
    /// value generates nothing for that segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pressroom_router::{Params, RoutePattern};
    ///
    /// let pattern = RoutePattern::parse("/single/:id").unwrap();
    /// let params: Params = [("id", "7")].into_iter().collect();
    /// assert_eq!(pattern.generate_url(&params), Some("/single/7".to_string()));
    /// assert_eq!(pattern.generate_url(&Params::new()), None);
    /// ```
    pub fn generate_url(&self, params: &Params) -> Option<String> {
        let segments: Option<Vec<String>> = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegmentType::Static(text) => Some(text.clone()),
                PatternSegmentType::Param(name) => params
                    .get(name)
                    .map(|value| urlencoding::encode(value).into_owned()),
                PatternSegmentType::Wildcard(name) => {
                    Some(params.get(name).unwrap_or_default().to_string())
                }
            })
            .collect();

        segments.map(|segs| {
            let filtered: Vec<String> = segs.into_iter().filter(|s| !s.is_empty()).collect();
            format!("/{}", filtered.join("/"))
        })
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn validate_segments(pattern: &str, segments: &[PatternSegmentType]) -> Result<(), PatternError> {
    let mut seen: Vec<&str> = Vec::new();

    for (idx, segment) in segments.iter().enumerate() {
        let name = match segment {
            PatternSegmentType::Static(_) => continue,
            PatternSegmentType::Wildcard(_) if idx + 1 != segments.len() => {
                return Err(PatternError::WildcardNotLast {
                    pattern: pattern.to_string(),
                });
            }
            PatternSegmentType::Param(name) if name.is_empty() => {
                return Err(PatternError::EmptyParamName {
                    pattern: pattern.to_string(),
                });
            }
            PatternSegmentType::Param(name) | PatternSegmentType::Wildcard(name) => name.as_str(),
        };

        if seen.contains(&name) {
            return Err(PatternError::DuplicateParam {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
        seen.push(name);
    }

    Ok(())
}

/// Walks pattern and path segments together (tail-recursive)
fn match_segments(
    pattern: &[PatternSegmentType],
    path: &[String],
    mut params: Params,
    case_insensitive: bool,
) -> Option<Params> {
    match (pattern.split_first(), path.split_first()) {
        (None, None) => Some(params),
        (None, Some(_)) => None,

        // Wildcard takes every remaining segment, including none
        (Some((PatternSegmentType::Wildcard(name), _)), _) => {
            params.insert(name.as_str(), path.join("/"));
            Some(params)
        }

        (Some(_), None) => None,

        (Some((PatternSegmentType::Param(name), pattern_rest)), Some((segment, path_rest))) => {
            params.insert(name.as_str(), segment.as_str());
            match_segments(pattern_rest, path_rest, params, case_insensitive)
        }

        (Some((PatternSegmentType::Static(text), pattern_rest)), Some((segment, path_rest))) => {
            let matches = if case_insensitive {
                text.eq_ignore_ascii_case(segment)
            } else {
                text == segment
            };

            if !matches {
                return None;
            }

            match_segments(pattern_rest, path_rest, params, case_insensitive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("products"),
            PatternSegmentType::Static("products".to_string())
        );
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(
            classify_segment(":id"),
            PatternSegmentType::Param("id".to_string())
        );
    }

    #[test]
    fn test_classify_wildcard() {
        assert_eq!(
            classify_segment("*"),
            PatternSegmentType::Wildcard(WILDCARD_PARAM.to_string())
        );
        assert_eq!(
            classify_segment("*rest"),
            PatternSegmentType::Wildcard("rest".to_string())
        );
    }

    #[test]
    fn test_parse_root() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert!(pattern.is_static());
        assert_eq!(pattern.priority(), 0);
    }

    #[test]
    fn test_parse_bare_wildcard() {
        let pattern = RoutePattern::parse("*").unwrap();
        assert!(pattern.is_wildcard());
        assert_eq!(pattern.as_str(), "*");
        assert_eq!(pattern.priority(), 1999);
    }

    #[test]
    fn test_parse_rejects_missing_slash() {
        assert_eq!(
            RoutePattern::parse("orders"),
            Err(PatternError::MissingLeadingSlash("orders".to_string()))
        );
        assert_eq!(RoutePattern::parse(""), Err(PatternError::Empty));
    }

    #[test]
    fn test_parse_rejects_empty_param_name() {
        assert!(matches!(
            RoutePattern::parse("/single/:"),
            Err(PatternError::EmptyParamName { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_param() {
        assert!(matches!(
            RoutePattern::parse("/:id/:id"),
            Err(PatternError::DuplicateParam { ref name, .. }) if name == "id"
        ));
    }

    #[test]
    fn test_parse_rejects_wildcard_in_middle() {
        assert!(matches!(
            RoutePattern::parse("/docs/*/edit"),
            Err(PatternError::WildcardNotLast { .. })
        ));
    }

    #[test]
    fn test_priority_ordering() {
        let literal = RoutePattern::parse("/single/new").unwrap();
        let param = RoutePattern::parse("/single/:id").unwrap();
        let wildcard = RoutePattern::parse("*").unwrap();

        assert_eq!(literal.priority(), 0);
        assert_eq!(param.priority(), 4);
        assert!(literal.priority() < param.priority());
        assert!(param.priority() < wildcard.priority());
    }

    #[test]
    fn test_deeper_wildcard_tried_first() {
        let docs = RoutePattern::parse("/docs/*path").unwrap();
        let bare = RoutePattern::parse("*").unwrap();
        assert!(docs.priority() < bare.priority());
    }

    #[test]
    fn test_shape_ignores_param_names() {
        let a = RoutePattern::parse("/single/:id").unwrap();
        let b = RoutePattern::parse("/single/:theid").unwrap();
        assert_eq!(a.shape(false), b.shape(false));
        assert_eq!(a.shape(false), "/single/:");
    }

    #[test]
    fn test_shape_case_folding() {
        let a = RoutePattern::parse("/Orders").unwrap();
        assert_eq!(a.shape(true), "/orders");
        assert_eq!(a.shape(false), "/Orders");
    }

    #[test]
    fn test_matches_static_root() {
        let root = RoutePattern::parse("/").unwrap();
        assert!(root.matches("/", false).is_some());
        assert!(root.matches("/demo", false).is_none());
    }

    #[test]
    fn test_matches_decodes_param() {
        let pattern = RoutePattern::parse("/single/:id").unwrap();
        let params = pattern.matches("/single/hello%20world", false).unwrap();
        assert_eq!(params.get("id"), Some("hello world"));
    }

    #[test]
    fn test_matches_case_insensitive_keeps_param_case() {
        let pattern = RoutePattern::parse("/single/:id").unwrap();
        assert!(pattern.matches("/SINGLE/AbC", false).is_none());

        let params = pattern.matches("/SINGLE/AbC", true).unwrap();
        assert_eq!(params.get("id"), Some("AbC"));
    }

    #[test]
    fn test_wildcard_binds_remaining_segments() {
        let pattern = RoutePattern::parse("*").unwrap();
        let params = pattern.matches("/does/not/exist", false).unwrap();
        assert_eq!(params.get("*"), Some("does/not/exist"));

        let params = pattern.matches("/", false).unwrap();
        assert_eq!(params.get("*"), Some(""));
    }

    #[test]
    fn test_named_wildcard_after_prefix() {
        let pattern = RoutePattern::parse("/docs/*path").unwrap();
        let params = pattern.matches("/docs/guides/setup", false).unwrap();
        assert_eq!(params.get("path"), Some("guides/setup"));
        assert!(pattern.matches("/blog/post", false).is_none());
    }

    #[test]
    fn test_generate_url_encodes_params() {
        let pattern = RoutePattern::parse("/single/:id").unwrap();
        let params: Params = [("id", "a b")].into_iter().collect();
        assert_eq!(pattern.generate_url(&params), Some("/single/a%20b".to_string()));
    }

    #[test]
    fn test_generate_url_root() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert_eq!(pattern.generate_url(&Params::new()), Some("/".to_string()));
    }

    #[test]
    fn test_static_segment_is_decoded_before_comparison() {
        let pattern = RoutePattern::parse("/products").unwrap();
        assert!(pattern.matches("/pro%64ucts", false).is_some());
        assert!(pattern.matches("/PRO%64UCTS", true).is_some());
        assert!(pattern.matches("/pro%64uct", false).is_none());
    }
}
