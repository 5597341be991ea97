//! Hierarchical dotted-name filtering
//!
//! A [`NameFilter`] compiles a set of dotted patterns and answers two
//! questions: whether a complete dotted name is selected (`full_match`), and
//! whether a name that may still grow further segments could ever be selected
//! (`prefix_match`). The second form gates descent into a module before the
//! final test names under it are known.
//!
//! Pattern grammar: segments separated by `.`; within a segment `?` matches
//! one non-dot character and a run of `*` matches zero or more non-dot
//! characters. A segment consisting entirely of two or more `*` is a
//! multi-segment wildcard that can swallow whole name segments.

use crate::error::{Error, Result};
use regex::Regex;

#[derive(Debug)]
enum Part {
    /// Matches exactly one name segment.
    Simple(Regex),
    /// Matches zero or more whole name segments.
    Multi(Regex),
}

#[derive(Debug)]
struct Pattern {
    parts: Vec<Part>,
}

fn compile_part(part: &str, pattern: &str) -> Result<Part> {
    if !part
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '?' || c == '*')
    {
        return Err(Error::InvalidPattern(pattern.to_string()));
    }
    let multi = part.len() >= 2 && part.chars().all(|c| c == '*');

    let mut regexp = String::from("^");
    let mut chars = part.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                // Collapse a run of stars into one wildcard.
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                regexp.push_str(if multi { ".*" } else { "[^.]*" });
            }
            '?' => regexp.push_str("[^.]"),
            c => regexp.push(c),
        }
    }
    regexp.push('$');
    let regexp = Regex::new(&regexp).map_err(|_| Error::InvalidPattern(pattern.to_string()))?;
    Ok(if multi {
        Part::Multi(regexp)
    } else {
        Part::Simple(regexp)
    })
}

impl Pattern {
    fn compile(pattern: &str) -> Result<Self> {
        let parts = pattern
            .split('.')
            .map(|part| compile_part(part, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Pattern { parts })
    }

    fn full_match(parts: &[Part], segments: &[&str]) -> bool {
        match parts.split_first() {
            None => segments.is_empty(),
            Some((Part::Simple(re), rest)) => match segments.split_first() {
                Some((seg, tail)) => re.is_match(seg) && Self::full_match(rest, tail),
                None => false,
            },
            // Try every split point: 0, 1, 2, ... consumed segments.
            Some((Part::Multi(re), rest)) => (0..=segments.len()).any(|n| {
                re.is_match(&segments[..n].join(".")) && Self::full_match(rest, &segments[n..])
            }),
        }
    }

    fn prefix_match(parts: &[Part], segments: &[&str]) -> bool {
        match parts.split_first() {
            None => true,
            Some((Part::Simple(re), rest)) => match segments.split_first() {
                Some((seg, tail)) => re.is_match(seg) && Self::prefix_match(rest, tail),
                // The candidate ran out first; further segments may still fit.
                None => true,
            },
            // A multi-segment wildcard can always be extended, so no
            // candidate can be ruled out before the name is complete.
            Some((Part::Multi(_), _)) => true,
        }
    }
}

/// A compiled set of dotted-name patterns. Immutable after construction.
#[derive(Debug)]
pub struct NameFilter {
    patterns: Vec<Pattern>,
}

impl NameFilter {
    /// Compile a set of patterns. Any segment character outside
    /// alphanumeric/underscore/wildcard is rejected.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::compile(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(NameFilter { patterns })
    }

    /// True if any pattern matches the entire dotted name.
    pub fn full_match(&self, name: &str) -> bool {
        let segments: Vec<&str> = name.split('.').collect();
        self.patterns
            .iter()
            .any(|p| Pattern::full_match(&p.parts, &segments))
    }

    /// True if the dotted name, possibly a true prefix of a longer name, is
    /// still consistent with any pattern.
    pub fn prefix_match(&self, name: &str) -> bool {
        let segments: Vec<&str> = name.split('.').collect();
        self.patterns
            .iter()
            .any(|p| Pattern::prefix_match(&p.parts, &segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> NameFilter {
        NameFilter::new(patterns).unwrap()
    }

    #[test]
    fn test_single_segment_wildcard() {
        let f = filter(&["a.*.c"]);
        assert!(f.prefix_match("a.b"));
        assert!(f.full_match("a.b.c"));
        assert!(!f.full_match("a.b"));
        assert!(!f.full_match("a.b.c.d"));
        assert!(!f.full_match("x.b.c"));
    }

    #[test]
    fn test_star_does_not_cross_dots() {
        let f = filter(&["a.b*"]);
        assert!(f.full_match("a.b"));
        assert!(f.full_match("a.bcd"));
        assert!(!f.full_match("a.b.c"));
    }

    #[test]
    fn test_question_mark() {
        let f = filter(&["a.?c"]);
        assert!(f.full_match("a.bc"));
        assert!(!f.full_match("a.c"));
        assert!(!f.full_match("a.bbc"));
    }

    #[test]
    fn test_multi_segment_wildcard_tail() {
        let f = filter(&["a.**"]);
        assert!(f.full_match("a"));
        assert!(f.full_match("a.b"));
        assert!(f.full_match("a.b.c"));
        assert!(!f.full_match("b"));
    }

    #[test]
    fn test_multi_segment_wildcard_backtracks() {
        let f = filter(&["**.c"]);
        assert!(f.full_match("c"));
        assert!(f.full_match("a.b.c"));
        assert!(!f.full_match("a.b"));

        let f = filter(&["a.**.d"]);
        assert!(f.full_match("a.d"));
        assert!(f.full_match("a.b.c.d"));
        assert!(!f.full_match("a.b.c"));
    }

    #[test]
    fn test_prefix_match_multi_is_unconditional() {
        let f = filter(&["a.**.z"]);
        assert!(f.prefix_match("a"));
        assert!(f.prefix_match("a.b.c.d"));
        assert!(!f.prefix_match("b"));
    }

    #[test]
    fn test_prefix_match_candidate_outruns_pattern() {
        let f = filter(&["a.b"]);
        assert!(f.prefix_match("a"));
        assert!(f.prefix_match("a.b"));
        assert!(f.prefix_match("a.b.c"));
        assert!(!f.prefix_match("a.c"));
    }

    #[test]
    fn test_multiple_patterns() {
        let f = filter(&["a.b", "x.*"]);
        assert!(f.full_match("a.b"));
        assert!(f.full_match("x.y"));
        assert!(!f.full_match("a.c"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(matches!(
            NameFilter::new(&["a.b-c"]),
            Err(Error::InvalidPattern(_))
        ));
        assert!(matches!(
            NameFilter::new(&["a.b c"]),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_literal_match() {
        let f = filter(&["sub.mod"]);
        assert!(f.full_match("sub.mod"));
        assert!(!f.full_match("sub.mod2"));
        assert!(!f.full_match("sub"));
    }
}
