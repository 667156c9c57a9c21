use crate::utils::error::{Result, UtilsError};
use once_cell::sync::Lazy;
use regex::Regex;

// 不含組合記號與連接標點
static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{Nl}\p{No}_][\p{L}\p{N}_]*\z").expect("valid identifier regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Determine whether the given string is a valid identifier-like name.
///
/// The first character must be a letter, an underscore or a non-decimal
/// numeric such as `²`; the rest letters, numerics or underscores. The whole
/// string has to match.
///
/// ```
/// use alpha_utils::valid_name;
///
/// assert!(valid_name("alpha"));
/// assert!(!valid_name("!alpha"));
/// ```
pub fn valid_name(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
