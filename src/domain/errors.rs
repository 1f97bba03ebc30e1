//! Domain validation errors.

use std::fmt;

/// Errors raised when a contact is explicitly validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Both first and last name are empty.
    EmptyNames,

    /// A name contains punctuation or digits. Carries the full name.
    InvalidNameCharacters(String),

    /// The phone number is invalid. Carries the number as entered.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNames => write!(f, "Please enter both first_name and last_name."),
            Self::InvalidNameCharacters(full_name) => {
                write!(f, "Invalid character(s) in name: {}", full_name)
            }
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_names_message_is_exact() {
        assert_eq!(
            ValidationError::EmptyNames.to_string(),
            "Please enter both first_name and last_name."
        );
    }

    #[test]
    fn test_messages_carry_offending_value() {
        let err = ValidationError::InvalidNameCharacters("R2 D2".to_string());
        assert_eq!(err.to_string(), "Invalid character(s) in name: R2 D2");

        let err = ValidationError::InvalidPhone("abcd".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: abcd");
    }
}
