use sea_orm::{DbErr, RuntimeErr, SqlErr};

/// SQLSTATE / SQLite result codes reported when a concurrent writer won.
///
/// Postgres: `40001` serialization_failure, `40P01` deadlock_detected.
/// SQLite: `5` SQLITE_BUSY, `6` SQLITE_LOCKED, `517` SQLITE_BUSY_SNAPSHOT.
const WRITE_CONFLICT_CODES: &[&str] = &["40001", "40P01", "5", "6", "517"];

/// Checks whether a database error was caused by a concurrent writer.
///
/// # Arguments
/// - `err` - Error returned by a query, statement or commit
///
/// # Returns
/// - `true` - Serialization failure, deadlock or locked database
/// - `false` - Any other error
pub fn is_write_conflict(err: &DbErr) -> bool {
    let runtime = match err {
        DbErr::Conn(e) | DbErr::Exec(e) | DbErr::Query(e) => e,
        _ => return false,
    };

    match runtime {
        RuntimeErr::SqlxError(e) => e
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .is_some_and(|code| WRITE_CONFLICT_CODES.contains(&code.as_ref())),
        RuntimeErr::Internal(msg) => msg.contains("database is locked"),
    }
}

/// Checks whether a database error is a unique constraint violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
