#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
use params::Placeholder;

// Statement serializers
mod create_table;
mod delete;
mod insert;
mod select;

use crate::stmt::{Statement, Transaction};

use tiny_orm_core::stmt::Params;

/// Serialize a statement to a SQL string.
///
/// The dialect is SQLite's: bracket-quoted identifiers and named `:name`
/// placeholders. Parameter values are collected into the `Params` passed to
/// [`Serializer::serialize`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut Params,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer { _priv: () }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        match stmt {
            Statement::CreateTable(stmt) => stmt.to_sql(&mut fmt),
            Statement::Delete(stmt) => stmt.to_sql(&mut fmt),
            Statement::Insert(stmt) => stmt.to_sql(&mut fmt),
            Statement::Select(stmt) => stmt.to_sql(&mut fmt),
        }

        ret.push(';');
        ret
    }

    /// Serialize a savepoint control operation. Savepoints are named
    /// `sp_{id}`.
    pub fn serialize_transaction(&self, op: &Transaction) -> String {
        match op {
            Transaction::Savepoint(id) => format!("SAVEPOINT sp_{id}"),
            Transaction::ReleaseSavepoint(id) => format!("RELEASE SAVEPOINT sp_{id}"),
            Transaction::RollbackToSavepoint(id) => format!("ROLLBACK TO SAVEPOINT sp_{id}"),
        }
    }
}
