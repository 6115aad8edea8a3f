use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Rejected size configuration; callers keep their previous valid one.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown scale law: {0} (expected linear, quadratic or cubic)")]
    UnknownLaw(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = EngineError::InvalidConfig("scale must be a positive number, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid config: scale must be a positive number, got 0"
        );
    }

    #[test]
    fn test_unknown_law_message() {
        let err = EngineError::UnknownLaw("hyper".to_string());
        assert!(err.to_string().contains("hyper"));
    }
}
