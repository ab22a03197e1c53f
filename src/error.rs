//! Defines the error type for failures in the persistence layer.

/// The errors that may occur when reading or writing expenses in the store.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested row was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The tags column could not be encoded to or decoded from JSON.
    #[error("could not convert tags to or from JSON: {0}")]
    InvalidTags(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidTags(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn other_sql_errors_are_wrapped() {
        let error: Error = rusqlite::Error::InvalidQuery.into();

        assert_eq!(error, Error::SqlError(rusqlite::Error::InvalidQuery));
    }
}
