//! Conversions between the JSON request/response shapes and the stored expense.
use serde::{Deserialize, Serialize};

use crate::expense::{Expense, ExpenseId, NewExpense, request::ValidatedExpense};

/// The JSON representation of an expense sent to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseResponse {
    /// The expense's ID.
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub title: String,
    /// How much was spent.
    pub amount: f64,
    /// Free text notes about the expense.
    pub note: String,
    /// Labels for grouping expenses.
    pub tags: Vec<String>,
}

impl From<ValidatedExpense> for NewExpense {
    fn from(request: ValidatedExpense) -> Self {
        Self {
            title: request.title,
            amount: request.amount,
            note: request.note,
            tags: request.tags,
        }
    }
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            title: expense.title,
            amount: expense.amount,
            note: expense.note,
            tags: expense.tags,
        }
    }
}
