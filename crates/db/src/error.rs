//! Mapping from driver errors to [`AppError`].

use photogram_common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Classify a driver error into the application error taxonomy.
///
/// Unique violations are reported as [`AppError::AlreadyExists`] with the
/// given subject; callers that need a more specific variant (usernames)
/// match before falling back to this.
pub fn classify(err: DbErr, subject: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            return AppError::AlreadyExists(subject.to_string());
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return AppError::ConstraintViolation(format!("{subject}: {msg}"));
        }
        _ => {}
    }

    match err {
        DbErr::Conn(e) => AppError::StoreUnavailable(e.to_string()),
        DbErr::ConnectionAcquire(e) => AppError::StoreUnavailable(e.to_string()),
        e => AppError::Database(e.to_string()),
    }
}

/// Shorthand for `map_err` on read paths, where a unique violation cannot occur.
pub fn db_err(err: DbErr) -> AppError {
    classify(err, "row")
}
