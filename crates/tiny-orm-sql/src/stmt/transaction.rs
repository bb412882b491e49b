/// Savepoint control.
///
/// Savepoints nest, and the outermost one opens (and on release, commits) a
/// transaction when none is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Savepoint(u64),
    ReleaseSavepoint(u64),
    RollbackToSavepoint(u64),
}
