use hiretrack_core::error::CoreError;

/// Errors returned by a [`super::RecruitmentStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database could not be reached (connection, TLS or pool failure).
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Any other database error.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::BackendUnavailable(err.to_string()),
            other => StoreError::Database(other),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::BackendUnavailable(format!("migrations failed: {err}"))
    }
}

// Rows with infallible conversions share the generic list path.
impl From<std::convert::Infallible> for StoreError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
