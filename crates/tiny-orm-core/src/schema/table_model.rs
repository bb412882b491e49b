use super::{Column, ForeignKey, ModelId, SubtableModel};
use indexmap::IndexMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    PoisonError, RwLock,
};

/// The compiled, validated table definition of one record type.
///
/// A table model is created once per record type by the
/// [`Registry`](super::Registry) and shared as `Arc<TableModel>`. It is
/// immutable afterwards, except that subtable connections add foreign keys
/// and `created` goes from `false` to `true` once DDL has been issued.
#[derive(Debug)]
pub struct TableModel {
    /// The record type this model was compiled from.
    pub id: ModelId,

    /// Table name, the record's name.
    pub table_name: String,

    /// Name of the identity column, `<table_name>_id` in snake case.
    pub identity_field: String,

    /// Columns in declaration order. Subtable fields are not columns.
    pub columns: IndexMap<String, Column>,

    /// Sets of columns that must be unique together.
    pub uniqueness_constraints: Vec<Vec<String>>,

    /// Subtables populating fields of this record, keyed by field name.
    pub subtables: IndexMap<String, SubtableModel>,

    foreign_keys: RwLock<IndexMap<String, ForeignKey>>,

    created: AtomicBool,
}

impl TableModel {
    pub(crate) fn new(
        id: ModelId,
        table_name: String,
        identity_field: String,
        columns: IndexMap<String, Column>,
        foreign_keys: IndexMap<String, ForeignKey>,
        uniqueness_constraints: Vec<Vec<String>>,
    ) -> TableModel {
        TableModel {
            id,
            table_name,
            identity_field,
            columns,
            uniqueness_constraints,
            subtables: IndexMap::new(),
            foreign_keys: RwLock::new(foreign_keys),
            created: AtomicBool::new(false),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// The identity column.
    pub fn identity(&self) -> Option<&Column> {
        self.columns.get(&self.identity_field)
    }

    /// Column definitions as they appear in `CREATE TABLE`, keyed by column
    /// name.
    pub fn table_fields(&self) -> IndexMap<String, String> {
        self.columns
            .values()
            .map(|column| (column.name.clone(), column.definition()))
            .collect()
    }

    /// A snapshot of the foreign keys, keyed by column name.
    pub fn foreign_keys(&self) -> IndexMap<String, ForeignKey> {
        self.foreign_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn foreign_key(&self, column: &str) -> Option<ForeignKey> {
        self.foreign_keys
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(column)
            .cloned()
    }

    pub(crate) fn add_foreign_key(&self, foreign_key: ForeignKey) {
        self.foreign_keys
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(foreign_key.column.clone(), foreign_key);
    }

    /// Whether `CREATE TABLE` has been issued for this model.
    pub fn is_created(&self) -> bool {
        self.created.load(Ordering::Acquire)
    }

    /// Records that the table exists. Returns `true` if this call made the
    /// transition.
    pub fn mark_created(&self) -> bool {
        !self.created.swap(true, Ordering::AcqRel)
    }
}
