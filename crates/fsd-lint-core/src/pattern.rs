//! Glob patterns for ignore lists and test-file detection.
//!
//! Patterns are compiled once when configuration is loaded and reused for
//! every match call. Matching follows the usual shell conventions: `*` and
//! `?` stay inside one path segment, `**` spans any number of segments, and
//! `{a,b}` alternation is expanded before compilation.

use glob::MatchOptions;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Errors raised while compiling glob patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Pattern string is empty.
    #[error("glob pattern must not be empty")]
    Empty,

    /// `{` without matching `}` or vice versa.
    #[error("unbalanced braces in glob pattern '{0}'")]
    UnbalancedBraces(String),

    /// Rejected by the glob compiler.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    Invalid {
        /// The offending pattern.
        pattern: String,
        /// Compiler message.
        reason: String,
    },
}

/// A validated glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    raw: String,
    alternatives: Vec<(String, glob::Pattern)>,
}

impl GlobPattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is empty, has unbalanced braces, or has
    /// invalid glob syntax.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let alternatives = expand_braces(pattern)?
            .into_iter()
            .map(|alt| {
                let compiled = glob::Pattern::new(&alt).map_err(|e| PatternError::Invalid {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
                Ok((alt, compiled))
            })
            .collect::<Result<Vec<_>, PatternError>>()?;

        Ok(Self {
            raw: pattern.to_string(),
            alternatives,
        })
    }

    /// Tests whether a forward-slash path matches this pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.alternatives.iter().any(|(raw, compiled)| {
            if compiled.matches_with(path, MATCH_OPTIONS) {
                return true;
            }
            // `dir/**` also covers `dir` itself.
            raw.strip_suffix("/**")
                .is_some_and(|prefix| path == prefix.trim_end_matches('/'))
        })
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// An ordered list of glob patterns; matches when any member matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<GlobPattern>,
}

impl PatternSet {
    /// Creates an empty set, which matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles every pattern in `patterns`.
    ///
    /// # Errors
    ///
    /// Returns the first compilation error.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| GlobPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if any pattern matches `path`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    /// Returns true if the set has no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterates over the patterns.
    pub fn iter(&self) -> impl Iterator<Item = &GlobPattern> {
        self.patterns.iter()
    }
}

/// Expands `{a,b}` alternation into every concrete pattern, left to right.
///
/// Nested groups are supported. A pattern without braces expands to itself.
///
/// # Errors
///
/// Returns [`PatternError::UnbalancedBraces`] on a dangling `{` or `}`.
pub fn expand_braces(pattern: &str) -> Result<Vec<String>, PatternError> {
    let unbalanced = || PatternError::UnbalancedBraces(pattern.to_string());

    let Some(open) = pattern.find('{') else {
        if pattern.contains('}') {
            return Err(unbalanced());
        }
        return Ok(vec![pattern.to_string()]);
    };
    if pattern[..open].contains('}') {
        return Err(unbalanced());
    }

    // Locate the matching close brace and the top-level commas in between.
    let mut depth = 0usize;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let i = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(i),
            _ => {}
        }
    }
    let close = close.ok_or_else(unbalanced)?;

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    let mut expanded = Vec::new();
    for pair in bounds.windows(2) {
        let option = &pattern[pair[0] + 1..pair[1]];
        for tail in expand_braces(&format!("{option}{suffix}"))? {
            expanded.push(format!("{prefix}{tail}"));
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        GlobPattern::new(pattern)
            .unwrap_or_else(|e| panic!("{e}"))
            .matches(path)
    }

    #[test]
    fn expands_simple_alternation() {
        assert_eq!(
            expand_braces("**/*.{ts,tsx}").unwrap(),
            vec!["**/*.ts".to_string(), "**/*.tsx".to_string()]
        );
    }

    #[test]
    fn expands_nested_alternation() {
        assert_eq!(
            expand_braces("a{b,c{d,e}}f").unwrap(),
            vec!["abf".to_string(), "acdf".to_string(), "acef".to_string()]
        );
    }

    #[test]
    fn expands_multiple_groups() {
        assert_eq!(expand_braces("{a,b}/{c,d}").unwrap().len(), 4);
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(expand_braces("**/*.{ts").is_err());
        assert!(expand_braces("**/*.ts}").is_err());
        assert!(GlobPattern::new("src/{a").is_err());
    }

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(GlobPattern::new(""), Err(PatternError::Empty));
    }

    #[test]
    fn exact_pattern_matches_exact_path() {
        assert!(matches("entities", "entities"));
        assert!(!matches("entities", "entities/user"));
        assert!(!matches("features", "entities"));
    }

    #[test]
    fn single_star_stays_in_segment() {
        assert!(matches("**/shared/ui/*", "shared/ui/Button"));
        assert!(!matches("**/shared/ui/*", "shared/ui/Button/index"));
        assert!(!matches("**/shared/ui/*", "shared/model/types"));
    }

    #[test]
    fn globstar_spans_segments() {
        assert!(matches("**/StoreProvider", "app/providers/StoreProvider"));
        assert!(matches("entities/user/**", "entities/user/model"));
        assert!(matches("entities/user/**", "entities/user"));
        assert!(!matches("entities/user/**", "entities/username"));
        assert!(matches("**/*.test.ts", "C:/project/src/entities/file.test.ts"));
    }

    #[test]
    fn braces_match_any_alternative() {
        let p = "**/*Ignored.{ts,tsx,js,jsx}";
        assert!(matches(p, "widgets/footer/StoreProviderIgnored.tsx"));
        assert!(matches(p, "widgets/footer/StoreProviderIgnored.js"));
        assert!(!matches(p, "widgets/footer/StoreProvider.tsx"));
    }

    #[test]
    fn set_matches_any_member() {
        let set = PatternSet::new(["pages/**", "widgets/**"]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.matches("widgets/footer"));
        assert!(!set.matches("features/getCard"));
        assert!(!PatternSet::empty().matches("anything"));
    }
}
