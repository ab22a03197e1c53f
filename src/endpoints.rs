//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}', use [format_endpoint].

/// The route to create and list expenses.
pub const EXPENSES: &str = "/expenses";
/// The route to get and update a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Assumes the path has a single parameter wrapped in braces.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::{EXPENSE, EXPENSES, format_endpoint};

    #[test]
    fn endpoints_are_valid_uris() {
        for endpoint in [EXPENSES.to_owned(), format_endpoint(EXPENSE, 1)] {
            assert!(endpoint.parse::<Uri>().is_ok(), "{endpoint} is not a valid URI");
        }
    }

    #[test]
    fn replaces_parameter() {
        assert_eq!(format_endpoint(EXPENSE, 42), "/expenses/42");
    }

    #[test]
    fn leaves_paths_without_parameters() {
        assert_eq!(format_endpoint(EXPENSES, 42), "/expenses");
    }
}
