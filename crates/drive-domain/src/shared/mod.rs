use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            /// Parse an untrusted identifier (path segment, header) into a typed id.
            pub fn parse(s: &str) -> Result<Self, DomainError> {
                Uuid::parse_str(s.trim())
                    .map(|id| Self(id.to_string()))
                    .map_err(|_| DomainError::InvalidInput(format!("Invalid {} ID: {}", $label, s)))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId, "user");
define_id!(HabitId, "habit");
define_id!(CompletionId, "completion");
define_id!(SleepEntryId, "sleep entry");

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    Unauthorized = 1001,

    // Resource Not Found (2xxx)
    HabitNotFound = 2001,
    CompletionNotFound = 2002,
    SleepEntryNotFound = 2003,
    NotFound = 2004,

    // Business Logic (3xxx)
    Conflict = 3001,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4003,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::Unauthorized | ErrorCode::Conflict => ErrorSeverity::Warning,

            ErrorCode::HabitNotFound
            | ErrorCode::CompletionNotFound
            | ErrorCode::SleepEntryNotFound
            | ErrorCode::NotFound
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::DataIntegrityError
            | ErrorCode::RepositoryError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,

            ErrorCode::SerializationError => ErrorSeverity::Warning,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::RepositoryError | ErrorCode::InfrastructureError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Completion not found: {0}")]
    CompletionNotFound(String),

    #[error("Sleep entry not found: {0}")]
    SleepEntryNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::HabitNotFound(_) => ErrorCode::HabitNotFound,
            DomainError::CompletionNotFound(_) => ErrorCode::CompletionNotFound,
            DomainError::SleepEntryNotFound(_) => ErrorCode::SleepEntryNotFound,
            DomainError::Conflict(_) => ErrorCode::Conflict,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Unauthorized(msg)
            | DomainError::HabitNotFound(msg)
            | DomainError::CompletionNotFound(msg)
            | DomainError::SleepEntryNotFound(msg)
            | DomainError::Conflict(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg)
            | DomainError::NotFound(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// True for the not-found family
    pub fn is_not_found(&self) -> bool {
        matches!(self.code().code(), 2000..=2999)
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
