//! Phone number normalization and validation.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Formatting characters removed before a phone number is checked.
static PHONE_FORMATTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+()\s]+").expect("phone formatting pattern is valid"));

/// Minimum number of digits a normalized phone number must have.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Strip `+`, parentheses and whitespace from a phone number.
///
/// # Example
///
/// ```
/// use contact_crm::domain::phone::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("+33 (1) 23 45 67 89"), "33123456789");
/// ```
pub fn normalize_phone_number(phone: &str) -> String {
    PHONE_FORMATTING.replace_all(phone, "").into_owned()
}

/// Validate a phone number as entered.
///
/// # Validation Rules
///
/// - After normalization, at least [`MIN_PHONE_DIGITS`] characters remain
/// - Every remaining character is an ASCII digit (`0`-`9`); digits from
///   other scripts, such as Arabic-Indic `٠١٢`, are rejected
///
/// Hyphens and dots are not formatting characters, so `555-123-4567` fails.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` carrying the original input.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let normalized = normalize_phone_number(phone);

    if normalized.chars().count() < MIN_PHONE_DIGITS
        || !normalized.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }

    Ok(())
}
