//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use email_syntax::prelude::*;
//!
//! assert!(validate_email("name@example.com"));
//! let addr = EmailAddress::parse("name@example.com").unwrap();
//! ```

pub use crate::{
    // Core types
    DomainPart, EmailAddress, Host, LocalPart,
    // Entry points
    octet_length, validate_email,
    // Errors
    DomainPartError, LocalPartError, ParseError, ParseErrorKind,
    // Constants
    MAX_DOMAIN_LENGTH, MAX_EMAIL_LENGTH, MAX_LABEL_LENGTH, MAX_LOCAL_PART_LENGTH,
    MIN_DOMAIN_LABELS, MIN_DOMAIN_LENGTH,
};
