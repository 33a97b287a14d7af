//! # Shared Utility Functions
//!
//! Display helpers used across client surfaces.

/// Mask the middle digits of a phone number for display.
///
/// Shows the first three and last four digits with `****` in between.
/// Numbers too short to mask meaningfully are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_phone;
///
/// assert_eq!(mask_phone("13812345678"), "138****5678");
/// assert_eq!(mask_phone("12345"), "12345");
/// ```
pub fn mask_phone(phone: &str) -> String {
    let len = phone.len();

    // Phone numbers are ASCII digits, so byte indexing is safe; anything
    // shorter than prefix + suffix is left untouched.
    if len < 8 || !phone.is_ascii() {
        return phone.to_string();
    }

    format!("{}****{}", &phone[..3], &phone[len - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13812345678"), "138****5678");
        assert_eq!(mask_phone("02112345678"), "021****5678");
    }

    #[test]
    fn test_mask_phone_short() {
        assert_eq!(mask_phone("12345"), "12345");
        assert_eq!(mask_phone(""), "");
    }
}
