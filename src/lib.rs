//! Pragmatic syntactic validator for email addresses.
//!
//! This crate decides whether a string is a syntactically well-formed email
//! address under a deliberately pragmatic (non-RFC-5322-complete) rule set:
//! octet-based length limits, character-class restrictions, structural rules
//! for dots, hyphens, and underscores, and special handling for IPv4-literal
//! domains.
//!
//! # Overview
//!
//! An address has the structure:
//!
//! ```text
//! <local-part>@<domain-part>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use email_syntax::{validate_email, EmailAddress};
//!
//! // Single boolean verdict
//! assert!(validate_email("name+alias@example.com"));
//! assert!(!validate_email("name@@example.com"));
//!
//! // Or parse into a validated type with component access
//! let addr = EmailAddress::parse("name@123.123.123.123").unwrap();
//! assert_eq!(addr.local_part().as_str(), "name");
//! assert!(addr.is_ip_literal());
//! ```
//!
//! # Length Constraints
//!
//! All limits are octet (UTF-8 byte) limits, not character counts, because
//! the protocol limits they emulate are octet-based.
//!
//! | Component | Limit |
//! |-----------|-------|
//! | Total address | 320 octets |
//! | Local part | 1-64 octets |
//! | Domain part | 3-253 octets |
//! | Each domain label | 63 octets |
//! | Domain labels | 2 minimum |
//!
//! # Rule Set
//!
//! The rule set resolves the common divergences one way, documented on each
//! type: the local part may end in `-` or `_` but not `+`, and may not start
//! with any of the three; `|`, `<`, `>` are always rejected; the top-level
//! domain label may contain digits and hyphens but may not end in a digit;
//! underscore never appears in a domain. A dotted-quad domain is validated
//! strictly as IPv4 and never falls back to hostname rules.
//!
//! Out of scope: quoted local parts, comments, folding whitespace, domain
//! literals other than plain IPv4, internationalized domain names (non-ASCII
//! is rejected), and any deliverability checking (no DNS/MX lookups).

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod domain_part;
mod email;
mod error;
mod local_part;
mod octets;
pub mod prelude;

pub use constants::{
    MAX_DOMAIN_LENGTH, MAX_EMAIL_LENGTH, MAX_LABEL_LENGTH, MAX_LOCAL_PART_LENGTH,
    MIN_DOMAIN_LABELS, MIN_DOMAIN_LENGTH,
};
pub use domain_part::{DomainPart, Host};
pub use email::{validate_email, EmailAddress};
pub use error::{DomainPartError, LocalPartError, ParseError, ParseErrorKind};
pub use local_part::LocalPart;
pub use octets::octet_length;
