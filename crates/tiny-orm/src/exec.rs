use tiny_orm_core::{
    stmt::{Params, Value},
    Cursor, Result,
};
use tiny_orm_sql::{Serializer, Statement};
use tracing::debug;

/// Serializes and executes a statement.
pub(crate) fn execute<C: Cursor + ?Sized>(cursor: &mut C, stmt: &Statement) -> Result<()> {
    let mut params = Params::new();
    let sql = Serializer::sqlite().serialize(stmt, &mut params);

    debug!(sql = %sql, params = ?params, "execute");
    cursor.execute(&sql, &params)
}

/// Serializes and executes a statement, returning its rows.
pub(crate) fn query<C: Cursor + ?Sized>(cursor: &mut C, stmt: &Statement) -> Result<Vec<Vec<Value>>> {
    execute(cursor, stmt)?;
    cursor.fetch_all()
}
