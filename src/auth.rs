//! HTTP basic authentication for the API.

use std::fmt;

use axum::{
    Json,
    extract::{FromRef, Request, State},
    http::{StatusCode, header::WWW_AUTHENTICATE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};

use crate::{AppState, expense::ErrorMessage};

/// The realm sent back to clients that fail authentication.
const REALM: &str = "expenses";

/// The single username and password pair accepted by the API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create the credentials clients must present.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, basic: &Basic) -> bool {
        self.username == basic.username() && self.password == basic.password()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// The state needed for the auth middleware
#[derive(Debug, Clone)]
pub struct AuthState {
    /// The accepted credentials. `None` lets every request through.
    pub credentials: Option<Credentials>,
}

impl<S> FromRef<AppState<S>> for AuthState {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            credentials: state.credentials.clone(),
        }
    }
}

/// Middleware function that checks the request's basic auth credentials.
///
/// The request is executed normally if the `Authorization` header carries the
/// configured username and password, otherwise a 401 response asking for
/// basic auth is returned.
pub async fn basic_auth_guard(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(credentials) = state.credentials else {
        return next.run(request).await;
    };

    match request.headers().typed_get::<Authorization<Basic>>() {
        Some(Authorization(basic)) if credentials.matches(&basic) => next.run(request).await,
        Some(Authorization(basic)) => {
            tracing::warn!(
                "Rejected request with invalid credentials for user \"{}\".",
                basic.username()
            );
            get_unauthorized_response()
        }
        None => {
            tracing::debug!("Rejected request without basic auth credentials.");
            get_unauthorized_response()
        }
    }
}

fn get_unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, format!("Basic realm=\"{REALM}\""))],
        Json(ErrorMessage::new("unauthorized")),
    )
        .into_response()
}
