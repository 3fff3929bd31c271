//! Domain entities: node tags

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Discriminant carried by every tree node.
///
/// The two variants are opaque labels; they carry no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    First,
    Second,
}

impl Tag {
    /// All tags, in declaration order.
    pub const ALL: [Tag; 2] = [Tag::First, Tag::Second];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::First => "first",
            Tag::Second => "second",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = DomainError;

    /// Case-insensitive; anything other than `first`/`second` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Tag::First),
            "second" => Ok(Tag::Second),
            _ => Err(DomainError::UnknownTag(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("first", Tag::First)]
    #[case("First", Tag::First)]
    #[case(" SECOND ", Tag::Second)]
    fn given_known_name_when_parsing_tag_then_returns_variant(
        #[case] input: &str,
        #[case] expected: Tag,
    ) {
        assert_eq!(input.parse::<Tag>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_name_when_parsing_tag_then_reports_it() {
        let err = "red".parse::<Tag>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownTag(ref s) if s == "red"));
    }

    #[test]
    fn given_tag_when_displayed_then_uses_lowercase_name() {
        assert_eq!(Tag::First.to_string(), "first");
        assert_eq!(Tag::Second.to_string(), "second");
    }
}
