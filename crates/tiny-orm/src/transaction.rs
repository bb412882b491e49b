use crate::Result;

use std::sync::atomic::{AtomicU64, Ordering};
use tiny_orm_core::{stmt::Params, Cursor};
use tiny_orm_sql::{stmt::Transaction, Serializer};
use tracing::{trace, warn};

/// Runs `f` inside a savepoint on `cursor`.
///
/// The savepoint is released when `f` succeeds and rolled back when it
/// fails, so the statements `f` issued are applied all together or not at
/// all. Savepoints nest; when no transaction is open the outermost one
/// commits on release.
///
/// The error returned by `f` is returned unchanged, even if the rollback
/// itself fails.
pub fn atomic<C, T, F>(cursor: &mut C, f: F) -> Result<T>
where
    C: Cursor + ?Sized,
    F: FnOnce(&mut C) -> Result<T>,
{
    static NEXT_SAVEPOINT_ID: AtomicU64 = AtomicU64::new(0);

    let id = NEXT_SAVEPOINT_ID.fetch_add(1, Ordering::Relaxed);

    control(cursor, Transaction::Savepoint(id))?;

    match f(cursor) {
        Ok(ret) => {
            control(cursor, Transaction::ReleaseSavepoint(id))?;
            Ok(ret)
        }
        Err(err) => {
            let rollback = control(cursor, Transaction::RollbackToSavepoint(id))
                .and_then(|_| control(cursor, Transaction::ReleaseSavepoint(id)));

            if let Err(rollback) = rollback {
                warn!(savepoint = id, error = %rollback, "failed to roll back savepoint");
            }

            Err(err)
        }
    }
}

fn control<C: Cursor + ?Sized>(cursor: &mut C, op: Transaction) -> Result<()> {
    let sql = Serializer::sqlite().serialize_transaction(&op);

    trace!(sql = %sql, "savepoint");
    cursor.execute(&sql, &Params::new())
}
