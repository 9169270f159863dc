//! Octet-length measurement.

/// Returns the number of octets the UTF-8 encoding of `s` occupies.
///
/// This is distinct from the character count: a single accented letter or
/// emoji occupies multiple octets. Every length limit in this crate is
/// defined in octets, so limit comparisons go through this function rather
/// than a character count.
///
/// # Examples
///
/// ```
/// use email_syntax::octet_length;
///
/// assert_eq!(octet_length("abc"), 3);
/// assert_eq!(octet_length("é"), 2);
/// assert_eq!(octet_length("🦀"), 4);
/// assert_eq!(octet_length(""), 0);
/// ```
#[must_use]
pub const fn octet_length(s: &str) -> usize {
    // `str::len` is already the UTF-8 byte count.
    s.len()
}
