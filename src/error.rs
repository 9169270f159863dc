//! Error types for email address parsing.

use std::fmt;

/// Errors that can occur when parsing an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Address exceeds maximum length
    TooLong {
        /// Maximum allowed length in octets
        max: usize,
        /// Actual length in octets
        actual: usize,
    },
    /// No `@` separator present
    MissingAtSign,
    /// More than one `@` present
    MultipleAtSigns {
        /// Number of `@` characters found
        count: usize,
    },
    /// Local part validation failed
    InvalidLocalPart(LocalPartError),
    /// Domain part validation failed
    InvalidDomainPart(DomainPartError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse email address '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::TooLong { max, actual } => {
                write!(f, "address is {actual} octets, maximum is {max}")
            }
            ParseErrorKind::MissingAtSign => write!(f, "missing '@' separator"),
            ParseErrorKind::MultipleAtSigns { count } => {
                write!(f, "expected exactly one '@', found {count}")
            }
            ParseErrorKind::InvalidLocalPart(e) => write!(f, "invalid local part: {e}"),
            ParseErrorKind::InvalidDomainPart(e) => write!(f, "invalid domain part: {e}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for local part validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalPartError {
    /// Local part is empty
    Empty,
    /// Local part exceeds maximum length
    TooLong {
        /// Maximum allowed length in octets
        max: usize,
        /// Actual length in octets
        actual: usize,
    },
    /// Character outside the allowed set
    InvalidChar {
        /// The invalid character
        char: char,
        /// Byte position in the input
        position: usize,
    },
    /// Character from the explicitly disallowed set (`|`, `<`, `>`)
    DisallowedChar {
        /// The disallowed character
        char: char,
        /// Byte position in the input
        position: usize,
    },
    /// Two consecutive dots
    ConsecutiveDots,
    /// Starts with a dot
    LeadingDot,
    /// Ends with a dot
    TrailingDot,
    /// Starts with a hyphen, underscore, or plus
    InvalidLeadingChar {
        /// The character found
        found: char,
    },
    /// Ends with a plus
    TrailingPlus,
}

impl fmt::Display for LocalPartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "local part cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "local part is {actual} octets, maximum is {max}")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::DisallowedChar { char, position } => {
                write!(f, "disallowed character '{char}' at position {position}")
            }
            Self::ConsecutiveDots => write!(f, "local part cannot contain consecutive dots"),
            Self::LeadingDot => write!(f, "local part cannot start with a dot"),
            Self::TrailingDot => write!(f, "local part cannot end with a dot"),
            Self::InvalidLeadingChar { found } => {
                write!(f, "local part cannot start with '{found}'")
            }
            Self::TrailingPlus => write!(f, "local part cannot end with '+'"),
        }
    }
}

impl std::error::Error for LocalPartError {}

/// Errors for domain part validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainPartError {
    /// Domain part is empty
    Empty,
    /// Domain part is below the minimum length
    TooShort {
        /// Minimum required length in octets
        min: usize,
        /// Actual length in octets
        actual: usize,
    },
    /// Domain part exceeds maximum length
    TooLong {
        /// Maximum allowed length in octets
        max: usize,
        /// Actual length in octets
        actual: usize,
    },
    /// Character outside the allowed set
    InvalidChar {
        /// The invalid character
        char: char,
        /// Byte position in the input
        position: usize,
    },
    /// Empty label (consecutive dots or leading/trailing dot)
    EmptyLabel,
    /// Fewer than the minimum number of labels
    TooFewLabels {
        /// Minimum required labels
        min: usize,
        /// Actual label count
        actual: usize,
    },
    /// Label exceeds maximum length
    LabelTooLong {
        /// The too-long label
        label: String,
        /// Maximum allowed length in octets
        max: usize,
        /// Actual length in octets
        actual: usize,
    },
    /// Label starts or ends with a hyphen
    HyphenAtLabelEdge {
        /// The offending label
        label: String,
    },
    /// Two consecutive hyphens anywhere in the domain
    ConsecutiveHyphens,
    /// Top-level label ends in a digit
    TldEndsWithDigit {
        /// The offending top-level label
        label: String,
    },
    /// Dotted-quad shaped domain failed strict IPv4 validation
    InvalidIpv4 {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl fmt::Display for DomainPartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "domain part cannot be empty"),
            Self::TooShort { min, actual } => {
                write!(f, "domain part is {actual} octets, minimum is {min}")
            }
            Self::TooLong { max, actual } => {
                write!(f, "domain part is {actual} octets, maximum is {max}")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::EmptyLabel => {
                write!(f, "empty label (consecutive dots or leading/trailing dot)")
            }
            Self::TooFewLabels { min, actual } => {
                write!(f, "domain has {actual} label(s), minimum is {min}")
            }
            Self::LabelTooLong { label, max, actual } => {
                write!(f, "label '{label}' is {actual} octets, maximum is {max}")
            }
            Self::HyphenAtLabelEdge { label } => {
                write!(f, "label '{label}' cannot start or end with a hyphen")
            }
            Self::ConsecutiveHyphens => {
                write!(f, "domain cannot contain consecutive hyphens")
            }
            Self::TldEndsWithDigit { label } => {
                write!(f, "top-level label '{label}' cannot end in a digit")
            }
            Self::InvalidIpv4 { value, reason } => {
                write!(f, "invalid IPv4 literal '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainPartError {}
