use drive_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::result_ext::map_sqlx_error;
use crate::config::TimeoutConfig;

/// Shared plumbing for SQLite repositories: every call runs under the query
/// timeout and failures carry the caller's context label.
#[derive(Clone)]
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
    query_timeout: Duration,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            query_timeout: TimeoutConfig::global().db_query,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run<T, F>(&self, fut: F, context: &str) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(|e| map_sqlx_error(e, context)),
            Err(_) => Err(DomainError::Repository(format!(
                "{}: timed out after {:?}",
                context, self.query_timeout
            ))),
        }
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        self.run(query.execute(self.pool()), context).await
    }

    pub async fn fetch_one<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<T, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        self.run(query.fetch_one(self.pool()), context).await
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        self.run(query.fetch_optional(self.pool()), context).await
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        self.run(query.fetch_all(self.pool()), context).await
    }
}
