//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState,
    auth::basic_auth_guard,
    endpoints,
    expense::{
        ErrorMessage, ExpenseStore, create_expense_endpoint, get_expense_endpoint,
        get_expenses_endpoint, update_expense_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every expense route sits behind the basic auth guard.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::EXPENSES,
            post(create_expense_endpoint::<S>).get(get_expenses_endpoint::<S>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<S>).put(update_expense_endpoint::<S>),
        )
        .layer(middleware::from_fn_with_state(state.clone(), basic_auth_guard))
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorMessage::new("not found"))).into_response()
}
