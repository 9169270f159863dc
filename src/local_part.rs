//! Local part type for email addresses.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_LOCAL_PART_LENGTH;
use crate::error::LocalPartError;
use crate::octets::octet_length;

/// A validated email local part (the portion before the `@`).
///
/// Local parts are 1 to 64 octets of ASCII letters, digits, and the
/// punctuation `! # $ % & ' * + - / = ? ^ _ ` { } ~ .`, subject to
/// structural rules on dots and leading/trailing characters. Quoted local
/// parts (`"name"@...`) are never accepted; the quote character is outside
/// the allowed set.
///
/// # Examples
///
/// ```
/// use email_syntax::LocalPart;
///
/// let local = LocalPart::parse("name+alias").unwrap();
/// assert_eq!(local.as_str(), "name+alias");
///
/// assert!(LocalPart::parse(".name").is_err());
/// assert!(LocalPart::parse("name+").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalPart(String);

/// Characters rejected regardless of the nominal character class.
///
/// `|` appears in the extended atext set but is vetoed here; the veto is
/// authoritative. `<` and `>` are outside the set as well, so this check is
/// redundant for them, but the three are rejected as one rule.
const DISALLOWED: [char; 3] = ['|', '<', '>'];

/// Characters forbidden in leading position.
const FORBIDDEN_LEADING: [char; 3] = ['-', '_', '+'];

impl LocalPart {
    /// Parses a local part from a string.
    ///
    /// Every rule must hold; the rules are independent predicates and the
    /// result does not depend on their evaluation order.
    ///
    /// # Errors
    ///
    /// Returns `LocalPartError` if:
    /// - The input is empty or exceeds 64 octets
    /// - Any character is outside the allowed set, or is `|`, `<`, or `>`
    /// - Two dots are adjacent, or a dot is leading or trailing
    /// - The first character is `-`, `_`, or `+`
    /// - The last character is `+`
    pub fn parse(input: &str) -> Result<Self, LocalPartError> {
        if input.is_empty() {
            return Err(LocalPartError::Empty);
        }

        let len = octet_length(input);
        if len > MAX_LOCAL_PART_LENGTH {
            return Err(LocalPartError::TooLong {
                max: MAX_LOCAL_PART_LENGTH,
                actual: len,
            });
        }

        for (i, c) in input.char_indices() {
            if !Self::is_valid_char(c) {
                return Err(LocalPartError::InvalidChar { char: c, position: i });
            }
            if DISALLOWED.contains(&c) {
                return Err(LocalPartError::DisallowedChar { char: c, position: i });
            }
        }

        if input.contains("..") {
            return Err(LocalPartError::ConsecutiveDots);
        }
        if input.starts_with('.') {
            return Err(LocalPartError::LeadingDot);
        }
        if input.ends_with('.') {
            return Err(LocalPartError::TrailingDot);
        }

        if let Some(first) = input.chars().next()
            && FORBIDDEN_LEADING.contains(&first)
        {
            return Err(LocalPartError::InvalidLeadingChar { found: first });
        }

        // Trailing hyphen and underscore stay legal; only plus is vetoed.
        if input.ends_with('+') {
            return Err(LocalPartError::TrailingPlus);
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the local part as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character belongs to the nominal allowed set
    /// (extended atext plus dot).
    ///
    /// Note that `|` is in this set yet still rejected by [`parse`]; the
    /// disallowed-character veto overrides the character class.
    ///
    /// [`parse`]: Self::parse
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '!' | '#'
                    | '$'
                    | '%'
                    | '&'
                    | '\''
                    | '*'
                    | '+'
                    | '-'
                    | '/'
                    | '='
                    | '?'
                    | '^'
                    | '_'
                    | '`'
                    | '{'
                    | '|'
                    | '}'
                    | '~'
                    | '.'
            )
    }
}

impl fmt::Display for LocalPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LocalPart {
    type Err = LocalPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LocalPart {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
