//! Utility functions for phone number handling.

/// Country code assumed when a phone number has none.
const DEFAULT_COUNTRY_CODE: &str = "+1";

/// Normalizes a phone number to its E.164-like form.
///
/// Numbers already starting with `+` are returned unchanged, others are assumed
/// to be US numbers and get the `+1` prefix.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_phone_number("5551234567"), "+15551234567");
/// assert_eq!(normalize_phone_number("+445551234567"), "+445551234567");
/// ```
pub fn normalize_phone_number(number: &str) -> String {
    if number.starts_with('+') {
        return number.to_owned();
    }

    format!("{}{}", DEFAULT_COUNTRY_CODE, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_without_prefix() {
        assert_eq!(normalize_phone_number("5551234567"), "+15551234567");
    }

    #[test]
    fn test_normalize_with_prefix() {
        assert_eq!(normalize_phone_number("+15551234567"), "+15551234567");
    }

    #[test]
    fn test_normalize_foreign_number_is_kept() {
        assert_eq!(normalize_phone_number("+33612345678"), "+33612345678");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_phone_number("5551234567");
        assert_eq!(normalize_phone_number(&once), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_phone_number(""), "+1");
    }
}
