//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Config, Error, ValidationPolicy,
    auth::Credentials,
    db::initialize,
    expense::{ExpenseService, ExpenseStore, SQLiteExpenseStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// The service that handles expense operations.
    pub expense_service: ExpenseService<S>,

    /// How create and update request bodies are validated.
    pub validation_policy: ValidationPolicy,

    /// The basic auth credentials guarding the API, if any.
    pub credentials: Option<Credentials>,
}

impl AppState<SQLiteExpenseStore> {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, config: Config) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::with_store(SQLiteExpenseStore::new(connection), config))
    }
}

impl<S> AppState<S>
where
    S: ExpenseStore,
{
    /// Create a new [AppState] around an existing expense store.
    pub fn with_store(store: S, config: Config) -> Self {
        Self {
            expense_service: ExpenseService::new(store),
            validation_policy: config.validation_policy,
            credentials: config.credentials,
        }
    }
}
