//! String validation functions

use alloc::format;
use alloc::string::{String, ToString};

/// Number of characters in `s`, counted as Unicode scalar values
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates that a value is present
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.is_empty() {
        Err("Field is required".to_string())
    } else {
        Ok(())
    }
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

pub fn validate_one_of(value: &str, allowed: &[&str]) -> Result<(), String> {
    if is_one_of(value, allowed) {
        Ok(())
    } else {
        Err(format!("Must be one of {}", allowed.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("x").is_ok());
        assert!(validate_required(" ").is_ok());
        assert!(validate_required("").is_err());
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("abc", 3).is_ok());
        assert!(validate_min_length("ab", 3).is_err());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        assert_eq!(char_len("äöü"), 3);
        assert!(validate_min_length("äöü", 3).is_ok());
        assert!(validate_max_length("äöü", 3).is_ok());
    }

    #[test]
    fn test_one_of() {
        let allowed = &["S", "M", "L"];
        assert!(is_one_of("M", allowed));
        assert!(!is_one_of("m", allowed));
        assert!(!is_one_of("", allowed));
        assert_eq!(
            validate_one_of("XL", allowed).unwrap_err(),
            "Must be one of S, M, L"
        );
    }
}
