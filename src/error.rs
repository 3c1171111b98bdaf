//! Error types for the album repository.
//!
//! Drivers surface their native errors through [`DriverError`]; the repository
//! wraps those with the operation name and input so a caller can tell which
//! statement failed without re-running it.

use thiserror::Error;

/// Raw failure from one of the SQL drivers.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Postgres(#[from] postgres::Error),

    /// Filesystem work done before the driver could open its database.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error returned by every repository operation.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The store could not be opened or did not answer a ping. The driver
    /// message is left to the error chain.
    #[error("failed to connect to {target}")]
    Connection { target: String, source: DriverError },

    /// A statement or row scan failed.
    #[error("{operation} {input}")]
    Query {
        operation: &'static str,
        input: String,
        source: DriverError,
    },

    /// A by-id statement matched zero rows.
    #[error("{operation} {id}: no such album")]
    NotFound { operation: &'static str, id: i64 },
}

/// Convenience Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    pub fn connection(target: impl Into<String>, source: impl Into<DriverError>) -> Self {
        Self::Connection {
            target: target.into(),
            source: source.into(),
        }
    }

    pub fn query(
        operation: &'static str,
        input: impl ToString,
        source: impl Into<DriverError>,
    ) -> Self {
        Self::Query {
            operation,
            input: input.to_string(),
            source: source.into(),
        }
    }

    pub fn not_found(operation: &'static str, id: i64) -> Self {
        Self::NotFound { operation, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_operation_and_id() {
        let err = RepositoryError::not_found("get_by_id", 999999);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "get_by_id 999999: no such album");
    }

    #[test]
    fn query_error_keeps_driver_source() {
        let source = rusqlite::Error::InvalidQuery;
        let err = RepositoryError::query("list_by_artist", "John Coltrane", source);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "list_by_artist John Coltrane");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn connection_error_names_target() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = RepositoryError::connection("sqlite:/nowhere", source);
        assert_eq!(err.to_string(), "failed to connect to sqlite:/nowhere");
    }

    #[test]
    fn driver_message_appears_once_in_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such table: album");
        let err = anyhow::Error::from(RepositoryError::query("list_all", "*", source));
        let rendered = format!("{err:#}");
        assert_eq!(rendered.matches("no such table: album").count(), 1, "{rendered}");
    }
}
