use derive_more::Display;

/// Failures surfaced by the dashboard. Sampling and window updates cannot fail;
/// only configuration and canvas drawing report errors.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Malformed or unknown configuration JSON.
    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),
    /// 2D context or drawing call rejected by the browser.
    #[display(fmt = "Rendering Error: {}", _0)]
    RenderingError(String),
    /// Well-formed input that violates a constraint.
    #[display(fmt = "Validation Error: {}", _0)]
    ValidationError(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = AppResult<T>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_prefixes_variant() {
        let err = AppError::ValidationError("capacity must be at least 1".into());
        assert_eq!(err.to_string(), "Validation Error: capacity must be at least 1");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
