//! Defines the endpoint for getting a single expense.
use axum::{
    Json,
    extract::{Path, State},
};

use crate::expense::{
    ExpenseError, ExpenseResponse, ExpenseState, ExpenseStore, core::parse_expense_id,
};

/// A route handler for getting an expense by its ID.
///
/// Responds with 404 if the ID does not refer to a stored expense.
pub async fn get_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    Path(expense_id): Path<String>,
) -> Result<Json<ExpenseResponse>, ExpenseError>
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    let id = parse_expense_id(&expense_id)?;

    state.service.get_expense_by_id(id).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
    };

    use crate::{
        ValidationPolicy,
        expense::{
            ExpenseError, get_expense_endpoint,
            request::ValidatedExpense,
            state::test_utils::{get_failing_state, get_test_state},
        },
    };

    #[tokio::test]
    async fn gets_stored_expense() {
        let state = get_test_state(ValidationPolicy::Strict);
        let want = state
            .service
            .create_expense(ValidatedExpense {
                title: "strawberry smoothie".to_owned(),
                amount: 79.0,
                note: "night market promotion discount 10 bath".to_owned(),
                tags: vec!["food".to_owned(), "beverage".to_owned()],
            })
            .unwrap();

        let got = get_expense_endpoint(State(state), Path(want.id.to_string()))
            .await
            .map(|Json(expense)| expense);

        assert_eq!(got, Ok(want));
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let state = get_test_state(ValidationPolicy::Strict);

        let got = get_expense_endpoint(State(state), Path("1".to_owned()))
            .await
            .map(|Json(expense)| expense);

        assert_eq!(got, Err(ExpenseError::NotFound));
    }

    #[tokio::test]
    async fn non_integer_id_is_not_found() {
        let state = get_test_state(ValidationPolicy::Strict);

        let got = get_expense_endpoint(State(state), Path("one".to_owned()))
            .await
            .map(|Json(expense)| expense);

        assert_eq!(got, Err(ExpenseError::NotFound));
    }

    #[tokio::test]
    async fn store_failure_is_not_found() {
        let state = get_failing_state();

        let got = get_expense_endpoint(State(state), Path("1".to_owned()))
            .await
            .map(|Json(expense)| expense);

        assert_eq!(got, Err(ExpenseError::NotFound));
    }
}
