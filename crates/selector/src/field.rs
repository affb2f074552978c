//! A single `/`-separated field path.
use itertools::Itertools;
use std::fmt;

/// A path segment that matches any single segment at its position.
pub const WILDCARD: &str = "*";

/// One path term of a selector, e.g. `developer/name` or `characters/*`.
///
/// A candidate path matches when it walks the same segments as the field for
/// as long as both have parts. Shorter candidates are ancestors of the field
/// and deeper candidates are descendants of it; both match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    parts: Vec<String>,
}

impl Field {
    /// Creates a field by splitting `value` on `/`.
    ///
    /// An empty value yields a single empty part.
    pub fn new(value: &str) -> Self {
        Self {
            parts: value.split('/').map(str::to_owned).collect(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Matches a `/`-separated candidate path.
    pub fn matches(&self, candidate: &str, ignore_case: bool) -> bool {
        let parts: Vec<&str> = candidate.split('/').collect();
        self.matches_parts(&parts, ignore_case)
    }

    /// Matches an already split candidate path.
    pub fn matches_parts<S: AsRef<str>>(&self, candidate: &[S], ignore_case: bool) -> bool {
        for (index, segment) in candidate.iter().enumerate() {
            let Some(part) = self.parts.get(index) else {
                // Everything beneath a selected field is selected.
                return true;
            };
            if part != WILDCARD && !segment_eq(part, segment.as_ref(), ignore_case) {
                return false;
            }
        }
        true
    }
}

fn segment_eq(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.chars().count() == b.chars().count()
            && a.chars().zip(b.chars()).all(|(x, y)| x == y || fold(x) == fold(y))
    } else {
        a == b
    }
}

/// Simple one-to-one uppercase mapping. Characters whose uppercase form
/// expands to several characters fold to themselves.
fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join("/"))
    }
}
