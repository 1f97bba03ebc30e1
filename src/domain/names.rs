//! Name validation rules.

use super::errors::ValidationError;

/// Whether a character is forbidden in a contact name.
///
/// ASCII punctuation and the digits `0-9` are rejected. Accented letters,
/// spaces and other non-ASCII characters are allowed.
pub fn is_forbidden_name_char(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_digit()
}

/// Validate a first/last name pair.
///
/// # Errors
///
/// - `ValidationError::EmptyNames` when both names are empty
/// - `ValidationError::InvalidNameCharacters` when either name contains a
///   forbidden character; carries the full name
pub fn validate_names(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    if first_name.is_empty() && last_name.is_empty() {
        return Err(ValidationError::EmptyNames);
    }

    if first_name
        .chars()
        .chain(last_name.chars())
        .any(is_forbidden_name_char)
    {
        return Err(ValidationError::InvalidNameCharacters(format!(
            "{} {}",
            first_name, last_name
        )));
    }

    Ok(())
}
