use alloc::borrow::Cow;
use alloc::string::String;
use alloc::string::ToString;
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use regex::Regex;
use thiserror::Error;

#[cfg(feature = "std")]
static IDENTIFIER_PARSER: std::sync::LazyLock<IdentifierParser> =
    std::sync::LazyLock::new(IdentifierParser::init);

/// Validates identifiers without the shared static parser, for `no_std` builds.
pub struct IdentifierParser(Regex);

impl IdentifierParser {
    /// Compiles the identifier regex.
    pub fn init() -> Self {
        Self(Regex::new(r"^[\p{XID_Start}_][\p{XID_Continue}]*").unwrap())
    }

    pub fn parse(&self, s: &str) -> Result<Identifier, IdentifierError> {
        match s {
            "true" | "false" | "null" => {
                return Err(IdentifierError::ReservedKeyword {
                    keyword: s.to_string(),
                });
            }
            _ => {}
        }

        let Some(matches) = self.0.find(s) else {
            if let Some(c) = s.chars().next() {
                return Err(IdentifierError::InvalidChar {
                    at: 0,
                    invalid_char: c,
                });
            } else {
                return Err(IdentifierError::Empty);
            }
        };
        if matches.len() == s.len() {
            Ok(Identifier(Cow::Owned(matches.as_str().to_string())))
        } else {
            // `at` counts characters, not bytes
            let at = matches.as_str().chars().count();
            match s[matches.end()..].chars().next() {
                Some(invalid_char) => Err(IdentifierError::InvalidChar { at, invalid_char }),
                None => Err(IdentifierError::Empty),
            }
        }
    }
}

#[cfg(feature = "std")]
impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IDENTIFIER_PARSER.parse(s)
    }
}

/// Name of a parameter, member or method.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(Cow<'static, str>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Empty identifier")]
    Empty,
    #[error("Invalid character for identifier: {invalid_char} at {at}")]
    InvalidChar {
        /// character index of the invalid character
        at: usize,
        /// the invalid character
        invalid_char: char,
    },
    #[error("Reserved keyword cannot be used as identifier: {keyword}")]
    ReservedKeyword { keyword: String },
}

impl Identifier {
    /// Creates a new Identifier without validation.
    ///
    /// The caller must ensure that the string is a valid identifier:
    /// - Must start with XID_Start character or underscore
    /// - Can contain XID_Continue characters
    /// - Must not be a reserved keyword (true, false, null)
    pub const fn new_unchecked(s: &'static str) -> Self {
        Identifier(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
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

    #[cfg(not(feature = "std"))]
    impl FromStr for Identifier {
        type Err = IdentifierError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let parser = IdentifierParser::init();
            parser.parse(s)
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            Identifier::from_str("value"),
            Ok(Identifier(Cow::Owned("value".to_string())))
        );
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(
            Identifier::from_str("_item2"),
            Ok(Identifier(Cow::Owned("_item2".to_string())))
        );
    }

    #[test]
    fn test_identifier_unicode() {
        assert_eq!(
            Identifier::from_str("größe"),
            Ok(Identifier(Cow::Owned("größe".to_string())))
        );
    }

    #[test]
    fn test_identifier_rejects_hyphen() {
        assert_eq!(
            Identifier::from_str("first-name"),
            Err(IdentifierError::InvalidChar {
                at: 5,
                invalid_char: '-',
            })
        );
    }

    #[test]
    fn test_identifier_invalid_char_position_counts_chars() {
        assert_eq!(
            Identifier::from_str("größe-x"),
            Err(IdentifierError::InvalidChar {
                at: 5,
                invalid_char: '-',
            })
        );
    }

    #[test]
    fn test_identifier_invalid_first_char() {
        assert_eq!(
            Identifier::from_str("1x"),
            Err(IdentifierError::InvalidChar {
                at: 0,
                invalid_char: '1',
            })
        );
    }

    #[test]
    fn test_identifier_error_empty() {
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_identifier_reject_null() {
        assert_eq!(
            Identifier::from_str("null"),
            Err(IdentifierError::ReservedKeyword {
                keyword: "null".to_string()
            })
        );
    }

    #[test]
    fn test_identifier_new_unchecked() {
        const TEST_ID: Identifier = Identifier::new_unchecked("count");
        assert_eq!(TEST_ID.as_ref(), "count");
        assert_eq!(TEST_ID, Identifier::from_str("count").unwrap());
    }
}
