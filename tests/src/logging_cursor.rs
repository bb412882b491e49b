use std::sync::{Arc, Mutex};
use tiny_orm_core::{
    stmt::{Params, Value},
    Cursor, Result,
};

/// A cursor wrapper that records every statement before running it.
#[derive(Debug)]
pub struct LoggingCursor<C> {
    inner: C,

    /// Shared with every [`ExecLog`] handed out
    log: Arc<Mutex<Vec<ExecutedSql>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedSql {
    pub sql: String,
    pub params: Params,
}

impl<C: Cursor> LoggingCursor<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn log(&self) -> ExecLog {
        ExecLog {
            ops: self.log.clone(),
        }
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }
}

impl<C: Cursor> Cursor for LoggingCursor<C> {
    fn execute(&mut self, sql: &str, params: &Params) -> Result<()> {
        self.log.lock().unwrap().push(ExecutedSql {
            sql: sql.to_string(),
            params: params.clone(),
        });

        self.inner.execute(sql, params)
    }

    fn fetch_all(&mut self) -> Result<Vec<Vec<Value>>> {
        self.inner.fetch_all()
    }

    fn last_insert_id(&self) -> Option<i64> {
        self.inner.last_insert_id()
    }
}

/// Read access to the statements recorded by a [`LoggingCursor`].
pub struct ExecLog {
    ops: Arc<Mutex<Vec<ExecutedSql>>>,
}

impl ExecLog {
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Every recorded statement, savepoint control included.
    pub fn all(&self) -> Vec<ExecutedSql> {
        self.ops.lock().unwrap().clone()
    }

    /// SQL text of the recorded statements, without savepoint control.
    pub fn statements(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.sql.clone())
            .filter(|sql| !is_savepoint_control(sql))
            .collect()
    }

    /// Number of recorded statements starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.sql.starts_with(prefix))
            .count()
    }
}

fn is_savepoint_control(sql: &str) -> bool {
    ["SAVEPOINT", "RELEASE", "ROLLBACK"]
        .iter()
        .any(|prefix| sql.starts_with(prefix))
}
