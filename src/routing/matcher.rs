//! Path pattern matching logic.
//!
//! # Responsibilities
//! - Parse path patterns into literal and `:param` segments
//! - Match a concrete path against one pattern
//! - Bind parameter segments to their values
//!
//! # Design Decisions
//! - Patterns parse once at registration, never per request
//! - A parameter binds exactly one non-empty segment
//! - Trailing slashes are significant (`/foo/` is not `/foo`)
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

use thiserror::Error;

/// Path parameters bound during a match (`:id` → "42").
pub type PathParams = BTreeMap<String, String>;

/// Error raised for a malformed path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("must start with '/'")]
    MissingLeadingSlash,
    #[error("empty segment")]
    EmptySegment,
    #[error("parameter segment with no name")]
    EmptyParamName,
    #[error("parameter name {0:?} appears more than once")]
    DuplicateParamName(String),
}

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/foo/:id/friends`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    literal_count: usize,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// Patterns must start with `/`. Segments starting with `:` declare a
    /// parameter; all other segments are literals. `/` alone is the root
    /// pattern with no segments.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash);
        }

        let mut segments = Vec::new();
        let mut literal_count = 0;
        let mut param_names: Vec<&str> = Vec::new();

        if raw != "/" {
            for part in raw[1..].split('/') {
                if part.is_empty() {
                    return Err(PatternError::EmptySegment);
                }
                if let Some(name) = part.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(PatternError::EmptyParamName);
                    }
                    if param_names.contains(&name) {
                        return Err(PatternError::DuplicateParamName(name.to_string()));
                    }
                    param_names.push(name);
                    segments.push(Segment::Param(name.to_string()));
                } else {
                    literal_count += 1;
                    segments.push(Segment::Literal(part.to_string()));
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            literal_count,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of literal (non-parameter) segments.
    ///
    /// The router orders candidates by this count, highest first.
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Whether two patterns are indistinguishable at match time.
    ///
    /// Literals compare by value; parameter segments compare equal regardless
    /// of name, so `/foo/:id` and `/foo/:name` have the same shape.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Literal(x), Segment::Literal(y)) => x == y,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Match a concrete path against this pattern.
    ///
    /// Returns the bound parameters on a match, `None` otherwise. Absence of
    /// a match is a normal outcome, not an error.
    pub fn capture(&self, path: &str) -> Option<PathParams> {
        if !path.starts_with('/') {
            return None;
        }

        let mut params = PathParams::new();

        if path == "/" {
            return self.segments.is_empty().then_some(params);
        }

        let mut parts = path[1..].split('/');
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if part != literal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), part.to_string());
                }
            }
        }

        // More path segments than pattern segments is not a match.
        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals_and_params() {
        let pattern = PathPattern::parse("/foo/:id/friends").unwrap();
        assert_eq!(pattern.literal_count(), 2);
        assert_eq!(pattern.as_str(), "/foo/:id/friends");
    }

    #[test]
    fn test_parse_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.literal_count(), 0);
        assert!(pattern.capture("/").is_some());
        assert!(pattern.capture("/foo").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            PathPattern::parse("foo/bar").unwrap_err(),
            PatternError::MissingLeadingSlash
        );
        assert_eq!(
            PathPattern::parse("/foo//bar").unwrap_err(),
            PatternError::EmptySegment
        );
        assert_eq!(
            PathPattern::parse("/foo/:").unwrap_err(),
            PatternError::EmptyParamName
        );
        assert_eq!(
            PathPattern::parse("/:id/x/:id").unwrap_err(),
            PatternError::DuplicateParamName("id".to_string())
        );
    }

    #[test]
    fn test_capture_binds_params() {
        let pattern = PathPattern::parse("/foo/:id").unwrap();
        let params = pattern.capture("/foo/123").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("123"));
    }

    #[test]
    fn test_capture_literal_mismatch() {
        let pattern = PathPattern::parse("/foo/bar").unwrap();
        assert!(pattern.capture("/foo/baz").is_none());
        assert!(pattern.capture("/foo").is_none());
        assert!(pattern.capture("/foo/bar/qux").is_none());
    }

    #[test]
    fn test_param_requires_non_empty_segment() {
        let pattern = PathPattern::parse("/foo/:id").unwrap();
        assert!(pattern.capture("/foo/").is_none());
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let pattern = PathPattern::parse("/foo").unwrap();
        assert!(pattern.capture("/foo").is_some());
        assert!(pattern.capture("/foo/").is_none());
    }

    #[test]
    fn test_same_shape() {
        let a = PathPattern::parse("/foo/:id").unwrap();
        let b = PathPattern::parse("/foo/:name").unwrap();
        let c = PathPattern::parse("/foo/bar").unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
        assert!(!b.same_shape(&c));
    }
}
