//! Constants for email address validation.
//!
//! All limits are expressed in octets (UTF-8 bytes), not characters,
//! because the underlying protocol limits are octet-based.

/// Maximum total email address length in octets.
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum local part length in octets.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum domain part length in octets.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Minimum domain part length in octets (shortest plausible domain, `a.a`).
pub const MIN_DOMAIN_LENGTH: usize = 3;

/// Maximum length of a single domain label in octets.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Minimum number of dot-separated labels in a hostname domain.
pub const MIN_DOMAIN_LABELS: usize = 2;
