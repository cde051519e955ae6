use drive_domain::shared::DomainError;

/// Maps `sqlx` failures onto domain errors with a short context label.
pub trait ResultExt<T> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| map_sqlx_error(e, context))
    }
}

pub(crate) fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
    match &error {
        sqlx::Error::RowNotFound => DomainError::NotFound(format!("{}: row not found", context)),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::Conflict(format!("{}: {}", context, db.message()))
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DomainError::DataIntegrity(format!("{}: {}", context, db.message()))
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            DomainError::Serialization(format!("{}: {}", context, error))
        }
        _ => DomainError::Repository(format!("{}: {}", context, error)),
    }
}
