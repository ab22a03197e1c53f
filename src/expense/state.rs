use axum::extract::FromRef;

use crate::{AppState, ValidationPolicy, expense::ExpenseService};

/// The state needed by the expense endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState<S> {
    /// The service that runs expense operations.
    pub service: ExpenseService<S>,
    /// How create and update request bodies are validated.
    pub validation_policy: ValidationPolicy,
}

impl<S> FromRef<AppState<S>> for ExpenseState<S>
where
    S: Clone,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            service: state.expense_service.clone(),
            validation_policy: state.validation_policy,
        }
    }
}
