use sea_orm::{DbErr, SqlErr};

/// True when `err` is a unique-index violation, optionally of the named index.
pub fn is_unique_violation(err: &DbErr, constraint: Option<&str>) -> bool {
    let message = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => msg,
        _ => {
            let msg = err.to_string();
            let lower = msg.to_lowercase();
            if !(lower.contains("23505")
                || lower.contains("duplicate key")
                || lower.contains("unique constraint"))
            {
                return false;
            }
            msg
        }
    };

    match constraint {
        Some(name) => message.contains(name),
        None => true,
    }
}
