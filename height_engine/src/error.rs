//! Error types for conversion, formatting and scale operations.

/// Result type for height engine operations
pub type HeightResult<T> = Result<T, HeightError>;

/// Error type for height engine operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeightError {
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    #[error("Invalid magnitude for {context}: {value}")]
    InvalidMagnitude { context: &'static str, value: f64 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl HeightError {
    /// Build an [`HeightError::InvalidMagnitude`] for the given call site.
    pub fn invalid(context: &'static str, value: f64) -> Self {
        HeightError::InvalidMagnitude { context, value }
    }
}

impl From<toml::de::Error> for HeightError {
    fn from(e: toml::de::Error) -> Self {
        HeightError::Configuration(format!("Failed to parse config: {}", e))
    }
}

impl From<std::io::Error> for HeightError {
    fn from(e: std::io::Error) -> Self {
        HeightError::Configuration(format!("Failed to read config file: {}", e))
    }
}

/// Check that `value` is a usable length: finite and non-negative.
pub(crate) fn ensure_length(context: &'static str, value: f64) -> HeightResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(HeightError::invalid(context, value))
    }
}

/// Check that a conversion of `input` stayed within f64 range.
pub(crate) fn ensure_converted(
    context: &'static str,
    input: f64,
    result: f64,
) -> HeightResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(HeightError::invalid(context, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_length_accepts_zero_and_positive() {
        assert_eq!(ensure_length("test", 0.0), Ok(0.0));
        assert_eq!(ensure_length("test", 1.8), Ok(1.8));
        assert_eq!(ensure_length("test", 8.7e28), Ok(8.7e28));
    }

    #[test]
    fn test_ensure_length_rejects_negative_and_non_finite() {
        for value in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ensure_length("test", value),
                Err(HeightError::InvalidMagnitude { context: "test", .. })
            ));
        }
    }

    #[test]
    fn test_ensure_converted_rejects_overflow() {
        assert_eq!(ensure_converted("test", 2.0, 4.0), Ok(4.0));
        assert_eq!(
            ensure_converted("test", 1e308, f64::INFINITY),
            Err(HeightError::invalid("test", 1e308))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HeightError::UnsupportedUnit("parsec".to_string()).to_string(),
            "Unsupported unit: parsec"
        );
        assert_eq!(HeightError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            HeightError::invalid("to_meters", -2.0).to_string(),
            "Invalid magnitude for to_meters: -2"
        );
    }

    #[test]
    fn test_toml_error_maps_to_configuration() {
        let err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        assert!(matches!(HeightError::from(err), HeightError::Configuration(_)));
    }
}
