//! Database error classification helpers.

/// Returns true if `e` is a unique constraint violation raised by the database.
///
/// SQLite does not report constraint names for unique violations, so any
/// unique violation on the `url` table is attributed to the alias column,
/// the only unique column besides the primary key.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
