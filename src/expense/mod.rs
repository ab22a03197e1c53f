mod core;
mod create_endpoint;
mod error;
mod get_endpoint;
mod list_endpoint;
mod mapping;
mod request;
mod service;
mod sqlite;
mod state;
mod store;
mod update_endpoint;

pub use core::{Expense, ExpenseId, NewExpense, create_expense_table};
pub use create_endpoint::create_expense_endpoint;
pub use error::{ErrorMessage, ExpenseError};
pub use get_endpoint::get_expense_endpoint;
pub use list_endpoint::get_expenses_endpoint;
pub use mapping::ExpenseResponse;
pub use request::{ExpenseRequest, ValidatedExpense};
pub use service::ExpenseService;
pub use sqlite::SQLiteExpenseStore;
pub use state::ExpenseState;
pub use store::ExpenseStore;
pub use update_endpoint::update_expense_endpoint;

#[cfg(test)]
pub(crate) use service::test_utils::FailingStore;
