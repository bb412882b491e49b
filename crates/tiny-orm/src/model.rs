use crate::{atomic, exec, subtable, Error, ModelWrapper, Record, Result};

use std::{marker::PhantomData, sync::Arc};
use tiny_orm_core::{
    schema::{ColumnKind, TableModel},
    stmt::{Filters, Operand, Value, ValueRecord},
    Cursor,
};
use tiny_orm_sql::{
    stmt::{CreateTable, Insert, Select},
    Predicate,
};
use tracing::{debug, trace};

/// Typed access to the table of record type `R`.
///
/// A model holds no connection; each operation runs on the cursor it is
/// given. Use [`Model::wrap`] to bind a model to a cursor.
pub struct Model<R> {
    table: Arc<TableModel>,
    _p: PhantomData<fn() -> R>,
}

/// The operations of a model, as seen by a [`ModelWrapper`].
pub trait ModelOps<C: ?Sized> {
    type Record;

    fn all(&self, cursor: &mut C) -> Result<Vec<Self::Record>>;

    fn get(&self, cursor: &mut C, id: i64) -> Result<Option<Self::Record>>;

    fn get_many(&self, cursor: &mut C, ids: &[i64]) -> Result<Vec<Self::Record>>;

    fn store(&self, cursor: &mut C, record: &mut Self::Record) -> Result<bool>;
}

impl<R: Record> Model<R> {
    pub(crate) fn new(table: Arc<TableModel>) -> Model<R> {
        Model {
            table,
            _p: PhantomData,
        }
    }

    /// The compiled table model.
    pub fn table(&self) -> &Arc<TableModel> {
        &self.table
    }

    /// Issues `CREATE TABLE IF NOT EXISTS` for this model and its subtables.
    ///
    /// Each table is created at most once per compiled model.
    pub fn create_table<C: Cursor + ?Sized>(&self, cursor: &mut C) -> Result<()> {
        create_table(cursor, &self.table)
    }

    /// Loads every record in the table.
    pub fn all<C: Cursor + ?Sized>(&self, cursor: &mut C) -> Result<Vec<R>> {
        self.find(cursor, &Filters::new())
    }

    /// Loads the record with the given identity.
    pub fn get<C: Cursor + ?Sized>(&self, cursor: &mut C, id: i64) -> Result<Option<R>> {
        let mut filters = Filters::new();
        filters.insert(self.table.identity_field.clone(), id.into());

        Ok(self.find(cursor, &filters)?.into_iter().next())
    }

    /// Loads the records with the given identities. Identities with no
    /// record are skipped.
    pub fn get_many<C: Cursor + ?Sized>(&self, cursor: &mut C, ids: &[i64]) -> Result<Vec<R>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut filters = Filters::new();
        filters.insert(
            self.table.identity_field.clone(),
            Operand::Value(ids.to_vec().into()),
        );

        self.find(cursor, &filters)
    }

    /// Loads the records matching every filter.
    ///
    /// Foreign-key columns are filtered by record, see [`Predicate`].
    pub fn find<C: Cursor + ?Sized>(&self, cursor: &mut C, filters: &Filters) -> Result<Vec<R>> {
        let table = &self.table;

        let filter = Predicate::build(&table.foreign_keys(), filters)?;
        let stmt = Select::new(&table.table_name, table.columns.keys()).filter(filter);

        let mut records = exec::query(cursor, &stmt.into())?
            .into_iter()
            .map(|row| self.row_to_record(row))
            .collect::<Vec<_>>();

        if !table.subtables.is_empty() && !records.is_empty() {
            let ids = records
                .iter()
                .map(|record| self.identity_of(record))
                .collect::<Result<Vec<_>>>()?;

            for (field, subtable) in &table.subtables {
                let mut values = subtable::select(cursor, subtable, &ids)?;

                for (record, id) in records.iter_mut().zip(&ids) {
                    record.insert(field, values.swap_remove(id).unwrap_or_default());
                }
            }
        }

        trace!(table = %table.table_name, records = records.len(), "loaded records");

        records.into_iter().map(R::load).collect()
    }

    /// Stores a record and its subtable fields.
    ///
    /// A record without an identity is inserted and given the identity the
    /// engine assigns. A record with one replaces the stored row with that
    /// identity, or is inserted under it. Subtable rows are always replaced.
    /// Everything happens inside one savepoint.
    pub fn store<C: Cursor + ?Sized>(&self, cursor: &mut C, record: &mut R) -> Result<bool> {
        let table = &self.table;
        let identity = record.identity();
        let mut values = record.to_record();

        let id = atomic(cursor, |cursor| {
            let mut insert = Insert::new(&table.table_name);

            for name in table.columns.keys() {
                if *name == table.identity_field {
                    if let Some(id) = identity {
                        insert = insert.value(name, id);
                    }
                    continue;
                }

                if values.get(name).is_none() {
                    return Err(Error::invalid_statement(format!(
                        "`{}::{}` is missing from the stored record",
                        table.table_name, name
                    )));
                }

                insert = insert.value(name, values.take(name));
            }

            if identity.is_some() {
                insert = insert.on_conflict(&table.identity_field);
            }

            exec::execute(cursor, &insert.into())?;

            let id = match identity {
                Some(id) => id,
                None => cursor.last_insert_id().ok_or_else(|| {
                    Error::invalid_statement(format!(
                        "no identity was assigned to the new `{}` row",
                        table.table_name
                    ))
                })?,
            };

            for (field, subtable) in &table.subtables {
                subtable::store(cursor, subtable, id, values.take(field))?;
            }

            Ok(id)
        })?;

        debug!(table = %table.table_name, id, "stored record");

        record.set_identity(id);
        Ok(true)
    }

    /// Binds this model to a cursor.
    pub fn wrap<'c, C: Cursor + ?Sized>(
        &'c self,
        cursor: &'c mut C,
    ) -> ModelWrapper<'c, Self, C> {
        ModelWrapper::new(self, cursor)
    }

    fn row_to_record(&self, row: Vec<Value>) -> ValueRecord {
        self.table
            .columns
            .values()
            .zip(row)
            .map(|(column, value)| {
                let value = match (column.kind, value) {
                    // Stored as 0/1
                    (ColumnKind::Boolean, Value::I64(v)) => Value::Bool(v != 0),
                    (_, value) => value,
                };
                (column.name.clone(), value)
            })
            .collect()
    }

    fn identity_of(&self, record: &ValueRecord) -> Result<i64> {
        let field = &self.table.identity_field;

        match record.get(field) {
            Some(Value::I64(id)) => Ok(*id),
            Some(value) => Err(Error::type_conversion(value.clone(), "i64")),
            None => Err(Error::missing_identity_field(&self.table.table_name, field)),
        }
    }
}

impl<R, C> ModelOps<C> for Model<R>
where
    R: Record,
    C: Cursor + ?Sized,
{
    type Record = R;

    fn all(&self, cursor: &mut C) -> Result<Vec<R>> {
        Model::all(self, cursor)
    }

    fn get(&self, cursor: &mut C, id: i64) -> Result<Option<R>> {
        Model::get(self, cursor, id)
    }

    fn get_many(&self, cursor: &mut C, ids: &[i64]) -> Result<Vec<R>> {
        Model::get_many(self, cursor, ids)
    }

    fn store(&self, cursor: &mut C, record: &mut R) -> Result<bool> {
        Model::store(self, cursor, record)
    }
}

impl<R> Clone for Model<R> {
    fn clone(&self) -> Self {
        Model {
            table: self.table.clone(),
            _p: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for Model<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("table", &self.table.table_name)
            .finish()
    }
}

fn create_table<C: Cursor + ?Sized>(cursor: &mut C, table: &TableModel) -> Result<()> {
    if table.is_created() {
        trace!(table = %table.table_name, "table already created");
        return Ok(());
    }

    exec::execute(cursor, &CreateTable::from_model(table).into())?;

    if table.mark_created() {
        debug!(table = %table.table_name, "created table");
    }

    for subtable in table.subtables.values() {
        create_table(cursor, &subtable.model)?;
    }

    Ok(())
}
