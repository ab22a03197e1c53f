//! Defines the endpoint for creating a new expense.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::expense::{ExpenseError, ExpenseRequest, ExpenseResponse, ExpenseState, ExpenseStore};

/// A route handler for creating a new expense, responds with 201 and the stored expense.
///
/// A body that cannot be decoded or fails validation gets a 400 response and
/// nothing is stored.
pub async fn create_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ExpenseError>
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Could not decode create expense request: {rejection}");
        ExpenseError::InvalidRequest(rejection.body_text())
    })?;
    let request = request.validate(state.validation_policy)?;

    let expense = state.service.create_expense(request)?;

    tracing::info!("Created expense {}", expense.id);

    Ok((StatusCode::CREATED, Json(expense)))
}
