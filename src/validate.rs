//! In-process constraint checks shared by the entities' `before_save` hooks.
//!
//! The database enforces the same rules, but checking here lets a violation
//! fail before any statement is issued, with a message naming the offending
//! table and column.

use sea_orm::{ActiveValue, DbErr, Value};

/// Unifies plain and nullable string columns for length checking.
pub(crate) trait StrValue {
    fn str_value(&self) -> Option<&str>;
}

impl StrValue for String {
    fn str_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrValue for Option<String> {
    fn str_value(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// A required column must carry a value at insert time.
pub(crate) fn check_required<V>(
    table: &str,
    column: &str,
    value: &ActiveValue<V>,
) -> Result<(), DbErr>
where
    V: Into<Value>,
{
    match value {
        ActiveValue::NotSet => Err(DbErr::Custom(format!(
            "{table}.{column} is required but no value was set"
        ))),
        _ => Ok(()),
    }
}

/// A string column must not exceed its declared width, counted in characters.
pub(crate) fn check_length<V>(
    table: &str,
    column: &str,
    max: usize,
    value: &ActiveValue<V>,
) -> Result<(), DbErr>
where
    V: StrValue + Into<Value>,
{
    if let ActiveValue::Set(v) | ActiveValue::Unchanged(v) = value {
        if let Some(s) = v.str_value() {
            let len = s.chars().count();
            if len > max {
                return Err(DbErr::Custom(format!(
                    "{table}.{column} is {len} characters long, exceeding the declared maximum of {max}"
                )));
            }
        }
    }
    Ok(())
}
