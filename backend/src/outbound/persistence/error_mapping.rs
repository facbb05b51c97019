//! Shared mapping from pool and Diesel failures to [`StoreError`].

use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::StoreError;

/// Map pool errors to store connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

/// Map Diesel errors to store errors.
///
/// Connection losses map to [`StoreError::Connection`]; everything else,
/// including constraint violations such as a chirp referencing an unknown
/// user, maps to [`StoreError::Query`].
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => StoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => StoreError::query("database error"),
        _ => StoreError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, StoreError::connection("timed out"));
    }

    #[rstest]
    fn closed_connections_map_to_connection_failures() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            StoreError::connection("database connection error")
        );
    }

    #[rstest]
    fn constraint_violations_map_to_query_failures() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("chirps_user_id_fkey".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            StoreError::query("database error")
        );
    }

    #[rstest]
    fn not_found_maps_to_a_query_failure() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            StoreError::query("record not found")
        );
    }
}
