//! Main email address type and the boolean validation entry point.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_EMAIL_LENGTH;
use crate::domain_part::DomainPart;
use crate::error::{ParseError, ParseErrorKind};
use crate::local_part::LocalPart;
use crate::octets::octet_length;

/// A parsed and validated email address.
///
/// # Structure
///
/// ```text
/// <local-part>@<domain-part>
/// ```
///
/// The input is never mutated or normalized; `as_str` returns the original
/// string. Parsing checks the overall shape (exactly one `@`, at most 320
/// octets) and then validates each part independently.
///
/// # Examples
///
/// ```
/// use email_syntax::EmailAddress;
///
/// let addr = EmailAddress::parse("name+alias@example.com").unwrap();
/// assert_eq!(addr.local_part().as_str(), "name+alias");
/// assert_eq!(addr.domain_part().as_str(), "example.com");
/// assert!(!addr.is_ip_literal());
///
/// let addr = EmailAddress::parse("name@123.123.123.123").unwrap();
/// assert!(addr.is_ip_literal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    local_part: LocalPart,
    domain_part: DomainPart,
    /// Original string form, kept verbatim
    raw: String,
}

impl EmailAddress {
    /// Parses an email address from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input does not contain exactly one `@`
    /// - The input exceeds 320 octets
    /// - The local part or domain part is invalid
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        let at_count = input.bytes().filter(|&b| b == b'@').count();
        match at_count {
            0 => return Err(ParseErrorKind::MissingAtSign),
            1 => {}
            count => return Err(ParseErrorKind::MultipleAtSigns { count }),
        }

        let len = octet_length(input);
        if len > MAX_EMAIL_LENGTH {
            return Err(ParseErrorKind::TooLong {
                max: MAX_EMAIL_LENGTH,
                actual: len,
            });
        }

        let (local, domain) = input
            .split_once('@')
            .ok_or(ParseErrorKind::MissingAtSign)?;

        let local_part = LocalPart::parse(local).map_err(ParseErrorKind::InvalidLocalPart)?;
        let domain_part =
            DomainPart::parse(domain).map_err(ParseErrorKind::InvalidDomainPart)?;

        Ok(Self {
            local_part,
            domain_part,
            raw: input.to_string(),
        })
    }

    /// Creates an email address from already-validated parts.
    ///
    /// The parts carry their own octet limits (64 local, 253 domain), so
    /// the joined address is at most 318 octets and always fits the
    /// 320-octet cap.
    #[must_use]
    pub fn from_parts(local_part: LocalPart, domain_part: DomainPart) -> Self {
        let raw = format!("{local_part}@{domain_part}");
        Self {
            local_part,
            domain_part,
            raw,
        }
    }

    /// Returns the local part.
    #[must_use]
    pub const fn local_part(&self) -> &LocalPart {
        &self.local_part
    }

    /// Returns the domain part.
    #[must_use]
    pub const fn domain_part(&self) -> &DomainPart {
        &self.domain_part
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the domain is an IPv4 literal.
    #[must_use]
    pub const fn is_ip_literal(&self) -> bool {
        self.domain_part.is_ip_literal()
    }
}

/// Returns true if `candidate` is a syntactically well-formed email address.
///
/// This is the single boolean verdict over the whole rule set: exactly one
/// `@`, octet-based length limits (320 total, 1-64 local, 3-253 domain,
/// 63 per label), local part character and structure rules, and domain
/// validation with the IPv4-literal special case. All failure modes collapse
/// into `false`; use [`EmailAddress::parse`] to learn which rule failed.
///
/// Side-effect-free and deterministic; safe to call concurrently.
///
/// # Examples
///
/// ```
/// use email_syntax::validate_email;
///
/// assert!(validate_email("example@example.com"));
/// assert!(validate_email("name@123.123.123.123"));
/// assert!(!validate_email("name@@example.com"));
/// assert!(!validate_email(""));
/// ```
#[must_use]
pub fn validate_email(candidate: &str) -> bool {
    EmailAddress::parse(candidate).is_ok()
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for EmailAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for EmailAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EmailAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainPartError, LocalPartError};

    #[test]
    fn parse_plain_address() {
        let addr = EmailAddress::parse("example@example.com").unwrap();
        assert_eq!(addr.local_part().as_str(), "example");
        assert_eq!(addr.domain_part().as_str(), "example.com");
        assert_eq!(addr.as_str(), "example@example.com");
    }

    #[test]
    fn parse_empty_fails() {
        let result = EmailAddress::parse("");
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::Empty, .. })
        ));
    }

    #[test]
    fn parse_without_at_fails() {
        assert!(matches!(
            EmailAddress::parse("example.com"),
            Err(ParseError { kind: ParseErrorKind::MissingAtSign, .. })
        ));
    }

    #[test]
    fn parse_double_at_fails() {
        assert!(matches!(
            EmailAddress::parse("name@@example.com"),
            Err(ParseError { kind: ParseErrorKind::MultipleAtSigns { count: 2 }, .. })
        ));
    }

    #[test]
    fn parse_at_only_fails() {
        // One '@' but both parts empty.
        assert!(EmailAddress::parse("@").is_err());
        assert!(matches!(
            EmailAddress::parse("@example.com"),
            Err(ParseError {
                kind: ParseErrorKind::InvalidLocalPart(LocalPartError::Empty),
                ..
            })
        ));
        assert!(matches!(
            EmailAddress::parse("name@"),
            Err(ParseError {
                kind: ParseErrorKind::InvalidDomainPart(DomainPartError::Empty),
                ..
            })
        ));
    }

    #[test]
    fn parse_over_320_octets_fails() {
        let addr = format!("{}@example.com", "a".repeat(400));
        assert!(matches!(
            EmailAddress::parse(&addr),
            Err(ParseError { kind: ParseErrorKind::TooLong { max: 320, .. }, .. })
        ));
    }

    #[test]
    fn total_length_boundary_321_fails() {
        // The '@' count is checked before the total length, so a
        // single-'@' candidate of 321 octets reaches the length check.
        let addr = format!("{}@example.com", "a".repeat(309));
        assert_eq!(addr.len(), 321);
        assert!(matches!(
            EmailAddress::parse(&addr),
            Err(ParseError {
                kind: ParseErrorKind::TooLong { max: 320, actual: 321 },
                ..
            })
        ));
    }

    #[test]
    fn longest_valid_address_passes() {
        // 64-octet local, 253-octet domain: 318 octets total.
        let label = "a".repeat(63);
        let domain = format!("{label}.{label}.{label}.{}", "a".repeat(61));
        assert_eq!(domain.len(), 253);
        let addr = format!("{}@{domain}", "a".repeat(64));
        assert_eq!(addr.len(), 318);
        assert!(EmailAddress::parse(&addr).is_ok());
    }

    #[test]
    fn from_parts_joins_validated_parts() {
        let local = LocalPart::parse("name").unwrap();
        let domain = DomainPart::parse("example.com").unwrap();
        let addr = EmailAddress::from_parts(local, domain);
        assert_eq!(addr.as_str(), "name@example.com");
    }

    #[test]
    fn from_parts_at_part_limits_stays_under_total_cap() {
        let label = "a".repeat(63);
        let local = LocalPart::parse(&"a".repeat(64)).unwrap();
        let domain =
            DomainPart::parse(&format!("{label}.{label}.{label}.{}", "a".repeat(61))).unwrap();
        let addr = EmailAddress::from_parts(local, domain);
        assert_eq!(addr.as_str().len(), 318);
        assert!(addr.as_str().len() <= MAX_EMAIL_LENGTH);
        assert_eq!(EmailAddress::parse(addr.as_str()).unwrap(), addr);
    }

    #[test]
    fn display_round_trips_raw_input() {
        let addr = EmailAddress::parse("First.Last@Example.COM").unwrap();
        assert_eq!(addr.to_string(), "First.Last@Example.COM");
    }

    #[test]
    fn ordering_follows_raw_string() {
        let a = EmailAddress::parse("a@example.com").unwrap();
        let b = EmailAddress::parse("b@example.com").unwrap();
        assert!(a < b);
    }

    #[test]
    fn scenario_table() {
        assert!(validate_email("example@example.com"));
        assert!(!validate_email("name@@example.com"));
        assert!(validate_email("name+alias@domain.com"));
        assert!(!validate_email("-name@domain.com"));
        assert!(!validate_email("name@example.com1"));
        assert!(validate_email("name@123.123.123.123"));
    }

    #[test]
    fn validate_email_rejects_bad_ipv4_without_fallback() {
        assert!(!validate_email("name@123.123.123.999"));
    }

    #[test]
    fn validate_email_rejects_non_ascii() {
        assert!(!validate_email("café@example.com"));
        assert!(!validate_email("name@exämple.com"));
        assert!(!validate_email("🦀@example.com"));
    }

    #[test]
    fn validate_email_rejects_underscore_in_domain() {
        assert!(!validate_email("name@ex_ample.com"));
        assert!(validate_email("first_last@example.com"));
        assert!(!validate_email("_name@example.com"));
    }

    #[test]
    fn validate_email_local_boundaries() {
        assert!(validate_email(&format!("{}@example.com", "a".repeat(64))));
        assert!(!validate_email(&format!("{}@example.com", "a".repeat(65))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let addr = EmailAddress::parse("name@example.com").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"name@example.com\"");
        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid_address() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"not-an-email\"");
        assert!(result.is_err());
    }
}
