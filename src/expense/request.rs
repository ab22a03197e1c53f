//! The JSON body accepted when creating or updating an expense, and the rules
//! for deciding whether a body is acceptable.
use serde::Deserialize;

use crate::{config::ValidationPolicy, expense::ExpenseError};

/// The JSON body for creating or updating an expense.
///
/// Every field is optional at the decoding stage so that the configured
/// [ValidationPolicy] decides what counts as missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExpenseRequest {
    /// A short description of what the money was spent on.
    pub title: Option<String>,
    /// How much was spent.
    pub amount: Option<f64>,
    /// Free text notes about the expense.
    pub note: Option<String>,
    /// Labels for grouping expenses.
    pub tags: Option<Vec<String>>,
}

/// An [ExpenseRequest] that passed validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedExpense {
    /// The expense title.
    pub title: String,
    /// The expense amount.
    pub amount: f64,
    /// The expense note.
    pub note: String,
    /// The expense tags.
    pub tags: Vec<String>,
}

impl ExpenseRequest {
    /// Check the request against `policy`.
    ///
    /// Under [ValidationPolicy::Strict] every field must be present and hold a
    /// non-zero value: a non-empty title and note, a non-zero amount and at
    /// least one tag. Under [ValidationPolicy::Permissive] absent fields are
    /// replaced with their zero value.
    ///
    /// # Errors
    /// Returns [ExpenseError::InvalidRequest] naming the first offending field.
    pub fn validate(self, policy: ValidationPolicy) -> Result<ValidatedExpense, ExpenseError> {
        match policy {
            ValidationPolicy::Permissive => Ok(ValidatedExpense {
                title: self.title.unwrap_or_default(),
                amount: self.amount.unwrap_or_default(),
                note: self.note.unwrap_or_default(),
                tags: self.tags.unwrap_or_default(),
            }),
            ValidationPolicy::Strict => {
                let title = required("title", self.title, String::is_empty)?;
                let amount = required("amount", self.amount, |amount| *amount == 0.0)?;
                let note = required("note", self.note, String::is_empty)?;
                let tags = required("tags", self.tags, Vec::is_empty)?;

                Ok(ValidatedExpense {
                    title,
                    amount,
                    note,
                    tags,
                })
            }
        }
    }
}

fn required<T>(
    field: &str,
    value: Option<T>,
    is_zero: impl Fn(&T) -> bool,
) -> Result<T, ExpenseError> {
    match value {
        None => Err(ExpenseError::InvalidRequest(format!(
            "missing required field `{field}`"
        ))),
        Some(value) if is_zero(&value) => Err(ExpenseError::InvalidRequest(format!(
            "required field `{field}` must not be empty or zero"
        ))),
        Some(value) => Ok(value),
    }
}
