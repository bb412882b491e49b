use crate::{stmt::Params, stmt::Value, Result};

/// A database cursor, the single point through which the ORM talks to the
/// storage engine.
///
/// The dialect is fixed: named `:name` parameters, bracket-quoted identifiers
/// and a single-column `INTEGER PRIMARY KEY` identity per table. Errors from
/// the engine are reported as [`Error::driver_operation_failed`] and passed
/// through unchanged.
///
/// [`Error::driver_operation_failed`]: crate::Error::driver_operation_failed
pub trait Cursor {
    /// Executes one statement, binding each named parameter the SQL text
    /// refers to from `params`.
    fn execute(&mut self, sql: &str, params: &Params) -> Result<()>;

    /// Returns the rows produced by the last executed statement, in the
    /// order the engine produced them.
    fn fetch_all(&mut self) -> Result<Vec<Vec<Value>>>;

    /// Identity assigned by the engine to the most recently inserted row.
    fn last_insert_id(&self) -> Option<i64>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn execute(&mut self, sql: &str, params: &Params) -> Result<()> {
        (**self).execute(sql, params)
    }

    fn fetch_all(&mut self) -> Result<Vec<Vec<Value>>> {
        (**self).fetch_all()
    }

    fn last_insert_id(&self) -> Option<i64> {
        (**self).last_insert_id()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn execute(&mut self, sql: &str, params: &Params) -> Result<()> {
        (**self).execute(sql, params)
    }

    fn fetch_all(&mut self) -> Result<Vec<Vec<Value>>> {
        (**self).fetch_all()
    }

    fn last_insert_id(&self) -> Option<i64> {
        (**self).last_insert_id()
    }
}
