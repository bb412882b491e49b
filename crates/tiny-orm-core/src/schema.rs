mod column;
pub use column::{Column, ColumnKind};

mod compile;

mod decompose;
pub use decompose::{decompose, is_valid};

mod field_type;
pub use field_type::{FieldType, RecordType};

mod foreign_key;
pub use foreign_key::ForeignKey;

mod model_id;
pub use model_id::ModelId;

mod name;
pub use name::Name;

mod record_schema;
pub use record_schema::RecordSchema;

mod registry;
pub use registry::Registry;

mod subtable;
pub use subtable::{Subtable, SubtableModel};

mod table_model;
pub use table_model::TableModel;

mod ty;
pub use ty::StorageType;
