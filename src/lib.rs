//! Expense tracker is a small web service for recording expenses.
//!
//! This library provides a JSON REST API for creating, reading, updating and
//! listing expenses stored in a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod auth;
mod config;
mod db;
mod endpoints;
mod error;
mod expense;
mod logging;
mod routing;

pub use app_state::AppState;
pub use auth::{Credentials, basic_auth_guard};
pub use config::{Config, ValidationPolicy};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use expense::{
    ErrorMessage, Expense, ExpenseError, ExpenseId, ExpenseRequest, ExpenseResponse,
    ExpenseService, ExpenseStore, NewExpense, SQLiteExpenseStore, ValidatedExpense,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_SIZE_LIMIT, logging_middleware};
pub use routing::build_router;

/// How long in-flight requests are given to finish once shutdown has been requested.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Shut the server down gracefully once ctrl+c or the terminate signal is received.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    shutdown_on(handle, shutdown_signal()).await;
}

/// Wait for `signal` to complete, then stop `handle`'s server from accepting
/// connections and give in-flight requests [SHUTDOWN_GRACE_PERIOD] to finish.
pub async fn shutdown_on(handle: Handle<SocketAddr>, signal: impl Future<Output = ()>) {
    signal.await;

    tracing::info!("Shutting down server...");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::debug!("Received ctrl+c signal."),
            Err(error) => {
                tracing::error!("Could not listen for ctrl+c: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::debug!("Received terminate signal.");
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
