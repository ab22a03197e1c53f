//! Defines the endpoint for updating an existing expense.
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::expense::{
    ExpenseError, ExpenseRequest, ExpenseResponse, ExpenseState, ExpenseStore,
    core::parse_expense_id,
};

/// A route handler for replacing the fields of an expense, responds with the
/// updated expense.
///
/// The body is checked before the ID, so a bad body gets a 400 response even
/// when the expense does not exist.
pub async fn update_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    Path(expense_id): Path<String>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<Json<ExpenseResponse>, ExpenseError>
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Could not decode update expense request: {rejection}");
        ExpenseError::InvalidRequest(rejection.body_text())
    })?;
    let request = request.validate(state.validation_policy)?;
    let id = parse_expense_id(&expense_id)?;

    let expense = state.service.update_expense_by_id(id, request)?;

    tracing::info!("Updated expense {}", expense.id);

    Ok(Json(expense))
}
