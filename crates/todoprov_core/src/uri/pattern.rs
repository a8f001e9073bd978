//! Wildcard path patterns for router matching.
//!
//! # Responsibility
//! - Represent match patterns structurally so the wildcard token stays a
//!   render-time choice of the target router.
//! - Decide whether one concrete URI falls under one pattern.
//!
//! # Invariants
//! - A wildcard segment matches exactly one non-empty path segment.
//! - Matching compares the authority at a segment boundary; a longer
//!   authority sharing the same prefix never matches.

use crate::uri::Authority;
use std::fmt::{Display, Formatter};

/// Wildcard token spelling understood by the target router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WildcardStyle {
    /// Generic single-segment wildcard, rendered as `*`.
    #[default]
    Star,
    /// Legacy matcher convention, rendered as `=`.
    Equals,
}

impl WildcardStyle {
    fn token(self) -> &'static str {
        match self {
            Self::Star => "*",
            Self::Equals => "=",
        }
    }
}

/// One path segment of a match pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Must equal this concrete segment.
    Literal(String),
    /// Matches any single non-empty segment in place of a row id.
    AnyId,
}

/// Structural match pattern: authority plus ordered pattern segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriPattern {
    authority: Authority,
    segments: Vec<PatternSegment>,
}

impl UriPattern {
    pub fn new(authority: Authority, segments: Vec<PatternSegment>) -> Self {
        Self {
            authority,
            segments,
        }
    }

    /// Returns the owning authority.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Renders the pattern with the given wildcard spelling.
    pub fn render(&self, style: WildcardStyle) -> String {
        let mut rendered = self.authority.as_str().to_string();
        for segment in &self.segments {
            rendered.push('/');
            match segment {
                PatternSegment::Literal(value) => rendered.push_str(value),
                PatternSegment::AnyId => rendered.push_str(style.token()),
            }
        }
        rendered
    }

    /// Returns whether `uri` falls under this pattern.
    ///
    /// Wildcard segments match any single non-empty segment; trailing `/`
    /// characters on `uri` are ignored, mirroring authority normalization.
    pub fn matches(&self, uri: &str) -> bool {
        let trimmed = uri.trim().trim_end_matches('/');
        let rest = match trimmed.strip_prefix(self.authority.as_str()) {
            Some(rest) => rest,
            None => return false,
        };
        let Some(path) = rest.strip_prefix('/') else {
            return false;
        };

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(parts)
            .all(|(segment, part)| match segment {
                PatternSegment::Literal(value) => part == value,
                PatternSegment::AnyId => !part.is_empty(),
            })
    }
}

impl Display for UriPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render(WildcardStyle::Star).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{PatternSegment, UriPattern, WildcardStyle};
    use crate::uri::Authority;

    fn items_pattern() -> UriPattern {
        UriPattern::new(
            Authority::new("content://x.y/todo").unwrap(),
            vec![
                PatternSegment::Literal("lists".to_string()),
                PatternSegment::AnyId,
                PatternSegment::Literal("items".to_string()),
            ],
        )
    }

    #[test]
    fn render_substitutes_wildcard_token() {
        let pattern = items_pattern();
        assert_eq!(
            pattern.render(WildcardStyle::Star),
            "content://x.y/todo/lists/*/items"
        );
        assert_eq!(
            pattern.render(WildcardStyle::Equals),
            "content://x.y/todo/lists/=/items"
        );
        assert_eq!(pattern.to_string(), pattern.render(WildcardStyle::Star));
    }

    #[test]
    fn wildcard_matches_any_single_segment() {
        let pattern = items_pattern();
        assert!(pattern.matches("content://x.y/todo/lists/5/items"));
        assert!(pattern.matches("content://x.y/todo/lists/-3/items"));
        assert!(pattern.matches("content://x.y/todo/lists/draft/items"));
    }

    #[test]
    fn wildcard_rejects_empty_segment() {
        let pattern = items_pattern();
        assert!(!pattern.matches("content://x.y/todo/lists//items"));
    }

    #[test]
    fn matching_requires_exact_segment_count() {
        let pattern = items_pattern();
        assert!(!pattern.matches("content://x.y/todo/lists/5"));
        assert!(!pattern.matches("content://x.y/todo/lists/5/items/12"));
    }

    #[test]
    fn matching_requires_authority_boundary() {
        let pattern = items_pattern();
        assert!(!pattern.matches("content://x.y/todoextra/lists/5/items"));
        assert!(!pattern.matches("content://other/lists/5/items"));
    }

    #[test]
    fn matching_ignores_trailing_slash() {
        let pattern = items_pattern();
        assert!(pattern.matches("content://x.y/todo/lists/5/items/"));
    }
}
