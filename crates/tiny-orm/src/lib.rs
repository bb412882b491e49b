pub mod db;
pub use db::Db;

mod exec;

mod model;
pub use model::{Model, ModelOps};

mod record;
pub use record::Record;

pub mod stmt;
pub use stmt::{Id, Primitive};

pub mod subtable;

mod transaction;
pub use transaction::atomic;

mod wrapper;
pub use wrapper::ModelWrapper;

pub use tiny_orm_core::{
    schema::{FieldType, RecordSchema, Subtable},
    stmt::{Filters, Operand, RecordRef, Value, ValueRecord},
    Cursor, Error, Result,
};

pub mod schema {
    pub use tiny_orm_core::schema::*;
}
