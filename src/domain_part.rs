//! Domain part type for email addresses.
//!
//! A domain part is either a hostname (two or more dot-separated labels)
//! or an IPv4 literal in dotted-quad form. The two modes are mutually
//! exclusive: a string shaped like a dotted quad is validated strictly as
//! an IPv4 address and is never reinterpreted as a hostname if that
//! validation fails.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::constants::{
    MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MIN_DOMAIN_LABELS, MIN_DOMAIN_LENGTH,
};
use crate::error::DomainPartError;
use crate::octets::octet_length;

/// The host a domain part resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A hostname (e.g., "example.com")
    Name(String),
    /// An IPv4 literal (e.g., "123.123.123.123")
    Ipv4(Ipv4Addr),
}

/// A validated email domain part (the portion after the `@`).
///
/// # Examples
///
/// ```
/// use email_syntax::{DomainPart, Host};
///
/// let domain = DomainPart::parse("example.com").unwrap();
/// assert_eq!(domain.as_str(), "example.com");
/// assert_eq!(domain.tld(), Some("com"));
///
/// let domain = DomainPart::parse("123.123.123.123").unwrap();
/// assert!(matches!(domain.host(), Host::Ipv4(_)));
/// assert!(domain.tld().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainPart {
    host: Host,
    /// Original string form, kept verbatim
    raw: String,
}

impl DomainPart {
    /// Parses a domain part from a string.
    ///
    /// Length bounds are checked before anything else, so an IPv4-shaped
    /// string shorter than 3 octets never reaches the IP-literal branch.
    ///
    /// # Errors
    ///
    /// Returns `DomainPartError` if:
    /// - The input is empty, under 3 octets, or over 253 octets
    /// - A dotted-quad shaped input has a group above 255
    /// - A hostname has fewer than 2 labels, an empty label, a label over
    ///   63 octets, a label with a hyphen at either edge, consecutive
    ///   hyphens anywhere, a character outside `[A-Za-z0-9.-]`, or a
    ///   top-level label ending in a digit
    pub fn parse(input: &str) -> Result<Self, DomainPartError> {
        if input.is_empty() {
            return Err(DomainPartError::Empty);
        }

        let len = octet_length(input);
        if len < MIN_DOMAIN_LENGTH {
            return Err(DomainPartError::TooShort {
                min: MIN_DOMAIN_LENGTH,
                actual: len,
            });
        }
        if len > MAX_DOMAIN_LENGTH {
            return Err(DomainPartError::TooLong {
                max: MAX_DOMAIN_LENGTH,
                actual: len,
            });
        }

        let host = if Self::is_dotted_quad_shape(input) {
            Host::Ipv4(Self::parse_ipv4_literal(input)?)
        } else {
            Self::validate_hostname(input)?;
            Host::Name(input.to_string())
        };

        Ok(Self {
            host,
            raw: input.to_string(),
        })
    }

    /// Returns the host this domain part resolves to.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the domain part as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the domain is an IPv4 literal.
    #[must_use]
    pub const fn is_ip_literal(&self) -> bool {
        matches!(self.host, Host::Ipv4(_))
    }

    /// Returns the top-level label, or `None` for an IPv4 literal.
    #[must_use]
    pub fn tld(&self) -> Option<&str> {
        match &self.host {
            Host::Name(name) => name.rsplit('.').next(),
            Host::Ipv4(_) => None,
        }
    }

    /// Returns true if the input has the dotted-quad shape: exactly four
    /// dot-separated groups of 1 to 3 ASCII digits.
    ///
    /// Shape alone does not make a valid IPv4 literal; groups above 255
    /// still fail the strict check in [`parse`].
    ///
    /// [`parse`]: Self::parse
    #[must_use]
    pub fn is_dotted_quad_shape(input: &str) -> bool {
        let mut groups = 0usize;
        for group in input.split('.') {
            groups += 1;
            if group.is_empty()
                || group.len() > 3
                || !group.bytes().all(|b| b.is_ascii_digit())
            {
                return false;
            }
        }
        groups == 4
    }

    fn parse_ipv4_literal(input: &str) -> Result<Ipv4Addr, DomainPartError> {
        let mut octets = [0u8; 4];
        for (octet, group) in octets.iter_mut().zip(input.split('.')) {
            // Shape guarantees 1-3 digits, so the value fits in a u32.
            let value: u32 = group.parse().map_err(|_| DomainPartError::InvalidIpv4 {
                value: input.to_string(),
                reason: "group is not a decimal number",
            })?;
            *octet = u8::try_from(value).map_err(|_| DomainPartError::InvalidIpv4 {
                value: input.to_string(),
                reason: "group exceeds 255",
            })?;
        }
        Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
    }

    fn validate_hostname(domain: &str) -> Result<(), DomainPartError> {
        // Whole-string character class first. Whitespace, underscores, and
        // any non-ASCII fail here, at any position.
        for (i, c) in domain.char_indices() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '.' {
                return Err(DomainPartError::InvalidChar { char: c, position: i });
            }
        }

        if domain.contains("--") {
            return Err(DomainPartError::ConsecutiveHyphens);
        }

        let labels: Vec<&str> = domain.split('.').collect();

        // Empty labels cover leading, trailing, and consecutive dots.
        if labels.iter().any(|label| label.is_empty()) {
            return Err(DomainPartError::EmptyLabel);
        }

        if labels.len() < MIN_DOMAIN_LABELS {
            return Err(DomainPartError::TooFewLabels {
                min: MIN_DOMAIN_LABELS,
                actual: labels.len(),
            });
        }

        for label in &labels {
            let len = octet_length(label);
            if len > MAX_LABEL_LENGTH {
                return Err(DomainPartError::LabelTooLong {
                    label: (*label).to_string(),
                    max: MAX_LABEL_LENGTH,
                    actual: len,
                });
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(DomainPartError::HyphenAtLabelEdge {
                    label: (*label).to_string(),
                });
            }
        }

        // The label charset leaves only letters, digits, and hyphens, and
        // trailing hyphens are already rejected, so this pins the top-level
        // label to end in a letter. An all-numeric TLD fails here too.
        let tld = labels[labels.len() - 1];
        if tld.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(DomainPartError::TldEndsWithDigit {
                label: tld.to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for DomainPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for DomainPart {
    type Err = DomainPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainPart {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<&str> for DomainPart {
    type Error = DomainPartError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DomainPart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DomainPart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
