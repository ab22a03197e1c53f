//! Defines the endpoint for listing every expense.
use axum::{Json, extract::State};

use crate::expense::{ExpenseError, ExpenseResponse, ExpenseState, ExpenseStore};

/// A route handler for getting all expenses. An empty store gives an empty list.
pub async fn get_expenses_endpoint<S>(
    State(state): State<ExpenseState<S>>,
) -> Result<Json<Vec<ExpenseResponse>>, ExpenseError>
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    state.service.get_expenses().map(Json)
}
