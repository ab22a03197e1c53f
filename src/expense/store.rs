//! Defines the expense store trait.

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
};

/// Handles the creation, retrieval and updating of expenses.
///
/// Implementers report failures as-is; deciding what a failure means for the
/// client is left to [ExpenseService](crate::ExpenseService).
pub trait ExpenseStore {
    /// Create a new expense in the store and return it with its assigned ID.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve an expense from the store.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Write the non-empty fields of `expense` over the stored expense `id`
    /// and return the stored result.
    ///
    /// Empty strings, a zero amount and an empty tag list leave the existing
    /// value untouched.
    fn update(&self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve every expense in the store.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;
}
