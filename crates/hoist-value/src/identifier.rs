use core::{
    fmt::{self, Display},
    str::FromStr,
};
use regex::Regex;
use thiserror::Error;

static IDENTIFIER_PARSER: std::sync::LazyLock<IdentifierParser> =
    std::sync::LazyLock::new(IdentifierParser::init);

/// A parser and factory API for identifiers.
/// Prefer using `Identifier::from_str` and `.parse()`, which share one compiled regex.
pub struct IdentifierParser(Regex);

impl IdentifierParser {
    /// Initialize the parser. This internally compiles a regex, so don't call this in a hot path.
    /// Prefer using the `FromStr` impl for `Identifier`.
    pub fn init() -> Self {
        Self(Regex::new(r"^\w+").unwrap())
    }

    pub fn parse(&self, s: &str) -> Result<Identifier, IdentifierError> {
        let Some(matched) = self.0.find(s) else {
            if let Some(c) = s.chars().next() {
                return Err(IdentifierError::InvalidChar {
                    at: 0,
                    invalid_char: c,
                });
            } else {
                return Err(IdentifierError::Empty);
            }
        };
        if matched.len() == s.len() {
            Ok(Identifier(s.to_string()))
        } else {
            Err(IdentifierError::InvalidChar {
                at: matched.end(),
                invalid_char: s[matched.end()..].chars().next().unwrap(),
            })
        }
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IDENTIFIER_PARSER.parse(s)
    }
}

/// A validated Hoist key.
///
/// Hoist identifiers are one or more Unicode word characters: letters,
/// digits, combining marks and the underscore. There are no reserved words
/// and a leading digit is allowed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("empty identifier")]
    Empty,
    #[error("invalid character for identifier: {invalid_char} at {at}")]
    InvalidChar {
        /// the problem index of the identifier in the string
        at: usize,
        /// the invalid character
        invalid_char: char,
    },
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(
            Identifier::from_str("hello"),
            Ok(Identifier("hello".to_string()))
        );
    }

    #[test]
    fn test_identifier_underscore() {
        assert_eq!(
            Identifier::from_str("_private_1"),
            Ok(Identifier("_private_1".to_string()))
        );
    }

    #[test]
    fn test_identifier_leading_digit() {
        assert_eq!(Identifier::from_str("1st"), Ok(Identifier("1st".to_string())));
    }

    #[test]
    fn test_identifier_число() {
        assert_eq!(
            Identifier::from_str("число"),
            Ok(Identifier("число".to_string()))
        );
    }

    #[test]
    fn test_identifier_with_hyphen() {
        assert_eq!(
            Identifier::from_str("hello-world"),
            Err(IdentifierError::InvalidChar {
                at: 5,
                invalid_char: '-'
            })
        );
    }

    #[test]
    fn test_identifier_with_space() {
        assert_eq!(
            Identifier::from_str("hello world"),
            Err(IdentifierError::InvalidChar {
                at: 5,
                invalid_char: ' '
            })
        );
    }

    #[test]
    fn test_identifier_leading_punctuation() {
        assert_eq!(
            Identifier::from_str("-hello"),
            Err(IdentifierError::InvalidChar {
                at: 0,
                invalid_char: '-'
            })
        );
    }

    #[test]
    fn test_identifier_empty() {
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
    }
}
