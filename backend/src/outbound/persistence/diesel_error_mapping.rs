//! Diesel and pool error mapping shared by the repositories.
//!
//! Each repository passes its own port error constructors, so one mapping
//! serves every port error type.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Pool failures always mean the database could not be reached.
pub(super) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    debug!(%message, "database pool checkout failed");
    connection(message)
}

/// Map Diesel failures onto query/connection constructors.
///
/// Driver messages are logged at debug level and replaced with generic text
/// so SQL details never reach the domain error.
pub(super) fn map_diesel_error<E>(
    error: DieselError,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Probe {
        Query(String),
        Connection(String),
    }

    fn query(message: &str) -> Probe {
        Probe::Query(message.to_owned())
    }

    fn connection(message: &str) -> Probe {
        Probe::Connection(message.to_owned())
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"), Probe::Connection);
        assert_eq!(mapped, Probe::Connection("timed out".to_owned()));
    }

    #[rstest]
    #[case(DieselError::NotFound, Probe::Query("record not found".to_owned()))]
    #[case(DieselError::RollbackTransaction, Probe::Query("database error".to_owned()))]
    fn diesel_errors_map_to_generic_messages(#[case] error: DieselError, #[case] expected: Probe) {
        assert_eq!(map_diesel_error(error, query, connection), expected);
    }
}
