//! Validation of caller-supplied token names and tickers

use super::error::DomainError;

pub const MIN_TOKEN_NAME_LEN: usize = 2;
pub const MAX_TOKEN_NAME_LEN: usize = 50;
pub const MIN_TICKER_LEN: usize = 1;
pub const MAX_TICKER_LEN: usize = 10;

/// Validate a user-supplied ticker: 1 to 10 characters, `A-Z` and `0-9` only.
pub fn validate_ticker(symbol: &str) -> Result<(), DomainError> {
    let len = symbol.chars().count();
    if !(MIN_TICKER_LEN..=MAX_TICKER_LEN).contains(&len) {
        return Err(DomainError::InvalidTokenData(format!(
            "Symbol must be between {} and {} characters",
            MIN_TICKER_LEN, MAX_TICKER_LEN
        )));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(DomainError::InvalidTokenData(
            "Symbol must be uppercase alphanumeric".to_string(),
        ));
    }
    Ok(())
}

/// Validate a ticker used as a registry lookup key: length only, any case.
pub fn validate_symbol_query(symbol: &str) -> Result<(), DomainError> {
    let len = symbol.chars().count();
    if (MIN_TICKER_LEN..=MAX_TICKER_LEN).contains(&len) {
        Ok(())
    } else {
        Err(DomainError::InvalidTokenData(
            "Invalid symbol format".to_string(),
        ))
    }
}

/// Validate a user-supplied name/ticker pair.
///
/// Names are 2 to 50 characters of ASCII letters, digits, whitespace and `-`.
pub fn validate_token_data(name: &str, symbol: &str) -> Result<(), DomainError> {
    if name.is_empty() || symbol.is_empty() {
        return Err(DomainError::InvalidTokenData(
            "Token name and symbol required".to_string(),
        ));
    }

    let len = name.chars().count();
    if !(MIN_TOKEN_NAME_LEN..=MAX_TOKEN_NAME_LEN).contains(&len) {
        return Err(DomainError::InvalidTokenData(format!(
            "Token name must be between {} and {} characters",
            MIN_TOKEN_NAME_LEN, MAX_TOKEN_NAME_LEN
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-')
    {
        return Err(DomainError::InvalidTokenData(
            "Token name contains invalid characters".to_string(),
        ));
    }

    validate_ticker(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        assert!(validate_token_data("Lending Vault", "LNDNG").is_ok());
        assert!(validate_token_data("Nova-Labs 2", "NL2").is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let err = validate_token_data("", "BTC").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTokenData("Token name and symbol required".to_string())
        );
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(validate_token_data("A", "BTC").is_err());
        assert!(validate_token_data(&"a".repeat(50), "BTC").is_ok());
        assert!(validate_token_data(&"a".repeat(51), "BTC").is_err());
    }

    #[test]
    fn test_name_characters() {
        let err = validate_token_data("Moon$hot", "MOON").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_symbol_query_accepts_lowercase() {
        assert!(validate_symbol_query("btc").is_ok());
        assert!(validate_symbol_query("").is_err());
        assert!(validate_symbol_query("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_ticker_rules() {
        assert!(validate_ticker("BTC").is_ok());
        assert!(validate_ticker("btc").is_err());
        assert!(validate_ticker("B-T").is_err());
        assert!(validate_ticker("ABCDEFGHIJK").is_err());
        assert!(validate_ticker("").is_err());
    }
}
