use drive_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Infrastructure
    /// Usage: `result.to_infra_err()?`
    fn to_infra_err(self) -> Result<T, DomainError>;

    /// Convert error to DomainError::InvalidInput, prefixed with what was being parsed
    fn to_input_err(self, what: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    fn to_input_err(self, what: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::InvalidInput(format!("Invalid {}: {}", what, e)))
    }
}
