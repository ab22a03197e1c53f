//! The operations behind the expense endpoints.
use tracing::Level;

use crate::{
    Error,
    expense::{
        ExpenseError, ExpenseId, ExpenseResponse, ExpenseStore, NewExpense,
        request::ValidatedExpense,
    },
};

/// Runs one expense operation per call against an [ExpenseStore].
///
/// Store failures are classified by which operation failed rather than by
/// their cause: lookups and updates report [ExpenseError::NotFound], while
/// creating and listing report [ExpenseError::InternalError]. The underlying
/// error is logged before it is discarded.
#[derive(Debug, Clone)]
pub struct ExpenseService<S> {
    store: S,
}

impl<S> ExpenseService<S>
where
    S: ExpenseStore,
{
    /// Create a service that reads and writes expenses in `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store a new expense and return it with its assigned ID.
    ///
    /// # Errors
    /// Returns [ExpenseError::InternalError] if the store fails.
    pub fn create_expense(
        &self,
        request: ValidatedExpense,
    ) -> Result<ExpenseResponse, ExpenseError> {
        self.store
            .create(NewExpense::from(request))
            .map(ExpenseResponse::from)
            .map_err(|error| {
                tracing::error!("Could not create expense: {error}");
                ExpenseError::InternalError
            })
    }

    /// Get the expense with the ID `id`.
    ///
    /// # Errors
    /// Returns [ExpenseError::NotFound] if the store fails for any reason.
    pub fn get_expense_by_id(&self, id: ExpenseId) -> Result<ExpenseResponse, ExpenseError> {
        self.store
            .get(id)
            .map(ExpenseResponse::from)
            .map_err(|error| {
                log_lookup_error(&format!("Could not get expense {id}"), &error);
                ExpenseError::NotFound
            })
    }

    /// Write the fields of `request` over the expense with the ID `id`.
    ///
    /// The ID is never changed.
    ///
    /// # Errors
    /// Returns [ExpenseError::NotFound] if the store fails for any reason.
    pub fn update_expense_by_id(
        &self,
        id: ExpenseId,
        request: ValidatedExpense,
    ) -> Result<ExpenseResponse, ExpenseError> {
        self.store
            .update(id, NewExpense::from(request))
            .map(ExpenseResponse::from)
            .map_err(|error| {
                log_lookup_error(&format!("Could not update expense {id}"), &error);
                ExpenseError::NotFound
            })
    }

    /// Get every stored expense. An empty store gives an empty list.
    ///
    /// # Errors
    /// Returns [ExpenseError::InternalError] if the store fails.
    pub fn get_expenses(&self) -> Result<Vec<ExpenseResponse>, ExpenseError> {
        self.store
            .get_all()
            .map(|expenses| expenses.into_iter().map(ExpenseResponse::from).collect())
            .map_err(|error| {
                tracing::error!("Could not get expenses: {error}");
                ExpenseError::InternalError
            })
    }
}

/// Log a failed get or update, returning the level used.
///
/// A missing row is routine for a lookup and is logged at `debug`, anything
/// else is logged at `error`.
fn log_lookup_error(context: &str, error: &Error) -> Level {
    match error {
        Error::NotFound => {
            tracing::debug!("{context}: {error}");
            Level::DEBUG
        }
        error => {
            tracing::error!("{context}: {error}");
            Level::ERROR
        }
    }
}
