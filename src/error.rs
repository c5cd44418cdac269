use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Result type of fallible model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// An error surfaced by the entity model.
///
/// The model itself performs no recovery; database errors are classified
/// into this taxonomy and otherwise passed through unchanged.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A declared constraint was violated: a required column was absent, a
    /// string exceeded its declared width, a foreign key referenced a
    /// missing row, or a (composite) key was duplicated.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other database error, surfaced unchanged.
    #[error(transparent)]
    Connection(DbErr),
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => match err {
                DbErr::RecordNotFound(msg) => Self::NotFound(msg),
                DbErr::RecordNotUpdated => {
                    Self::NotFound("no matching record to update".to_owned())
                }
                // DbErr::Custom is only raised by the crate's own
                // before_save validation hooks.
                DbErr::Custom(msg) => Self::ConstraintViolation(msg),
                err => Self::Connection(err),
            },
        }
    }
}

impl ModelError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}
