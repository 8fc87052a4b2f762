/// Validation utilities for the token forms

use crate::core::error::AppError;

pub const MAX_TAX_RATE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, failing with [`AppError::Validation`].
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate token name
pub fn validate_token_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err("Token name is required");
    }

    ValidationResult::ok()
}

/// Validate token symbol
pub fn validate_token_symbol(symbol: &str) -> ValidationResult {
    if symbol.trim().is_empty() {
        return ValidationResult::err("Token symbol is required");
    }

    ValidationResult::ok()
}

pub fn validate_tax_rate(tax_rate: u32) -> ValidationResult {
    if tax_rate > MAX_TAX_RATE {
        return ValidationResult::err(format!("Tax rate must be between 0 and {}%", MAX_TAX_RATE));
    }

    ValidationResult::ok()
}

/// Run validators in order and stop at the first failure.
pub fn first_failure(results: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
    results
        .into_iter()
        .find(|r| !r.is_valid)
        .unwrap_or_else(ValidationResult::ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_name() {
        assert!(validate_token_name("DogeMax").is_valid);
        assert!(!validate_token_name("").is_valid);
        assert!(!validate_token_name("   ").is_valid);
    }

    #[test]
    fn test_token_symbol() {
        assert!(validate_token_symbol("DMAX").is_valid);
        assert!(!validate_token_symbol(" \t").is_valid);
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(validate_tax_rate(0).is_valid);
        assert!(validate_tax_rate(20).is_valid);
        assert!(!validate_tax_rate(21).is_valid);
    }

    #[test]
    fn test_first_failure_reports_earliest() {
        let result = first_failure([
            validate_token_name("Doge"),
            validate_token_symbol(""),
            validate_tax_rate(99),
        ]);
        assert_eq!(result.error.as_deref(), Some("Token symbol is required"));
        assert!(matches!(result.into_result(), Err(AppError::Validation(_))));
    }
}
