use crate::Predicate;

/// `DELETE FROM <table> WHERE <filter>`
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,

    /// Rows to delete. An empty predicate deletes every row.
    pub filter: Predicate,
}
