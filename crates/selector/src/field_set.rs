//! The parsed form of a whole selector.
use crate::error::SyntaxError;
use crate::field::Field;
use crate::parser::{ParseContext, Parser};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// An immutable collection of [`Field`]s parsed from one selector.
///
/// Fields keep the order in which they appear in the selector. A set is safe
/// to share between threads and filtering calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    /// A set without fields. It matches no path at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tokenizes and parses `value`.
    ///
    /// A failed parse never yields a partial set.
    pub fn try_parse(value: &str) -> Result<Self, SyntaxError> {
        let mut context = ParseContext::new(value);
        Parser::new(&mut context).parse();

        if let Some(error) = context.error {
            return Err(error);
        }

        log::debug!("Parsed selector {:?} into {} field(s)", value, context.fields.len());
        Ok(Self {
            fields: context.fields,
        })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any field matches the `/`-separated `candidate` path.
    pub fn matches(&self, candidate: &str, ignore_case: bool) -> bool {
        let parts: Vec<&str> = candidate.split('/').collect();
        self.fields
            .iter()
            .any(|field| field.matches_parts(&parts, ignore_case))
    }

    /// Binds a case-sensitivity flag to this set.
    pub fn matcher(&self, ignore_case: bool) -> FieldMatcher<'_> {
        FieldMatcher {
            fields: self,
            ignore_case,
        }
    }
}

/// A [`FieldSet`] together with the case-sensitivity to match it with.
#[derive(Debug, Clone, Copy)]
pub struct FieldMatcher<'a> {
    pub fields: &'a FieldSet,
    pub ignore_case: bool,
}

impl FieldMatcher<'_> {
    pub fn matches(&self, candidate: &str) -> bool {
        self.fields.matches(candidate, self.ignore_case)
    }
}

impl FromStr for FieldSet {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// The canonical selector: fields joined by `,`, each written with `/`.
impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.iter().join(","))
    }
}
