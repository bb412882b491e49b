use tiny_orm_core::{
    schema::{FieldType, ModelId, RecordSchema, RecordType},
    stmt::{RecordRef, ValueRecord},
    Result,
};

/// A Rust type stored as a table.
///
/// The schema is declared explicitly: the table is named after the record,
/// and one field named `<record>_id` (snake case) holds the integer
/// identity. The identity is usually optional so that records can be built
/// before they are stored.
///
/// ```ignore
/// struct Student {
///     name: String,
///     student_id: Option<i64>,
/// }
///
/// impl Record for Student {
///     fn schema() -> RecordSchema {
///         RecordSchema::new("Student")
///             .field("name", String::field_type())
///             .field("student_id", Option::<i64>::field_type())
///     }
///
///     fn identity(&self) -> Option<i64> {
///         self.student_id
///     }
///
///     fn set_identity(&mut self, identity: i64) {
///         self.student_id = Some(identity);
///     }
///
///     fn to_record(&self) -> ValueRecord {
///         ValueRecord::new()
///             .with("name", &self.name)
///             .with("student_id", self.student_id)
///     }
///
///     fn load(mut record: ValueRecord) -> Result<Self> {
///         Ok(Student {
///             name: Primitive::load(record.take("name"))?,
///             student_id: Primitive::load(record.take("student_id"))?,
///         })
///     }
/// }
/// ```
pub trait Record: Sized + 'static {
    /// Describes the record's fields, uniqueness constraints and subtables.
    fn schema() -> RecordSchema;

    /// The stored identity, `None` if the record has not been stored.
    fn identity(&self) -> Option<i64>;

    /// Called with the identity assigned when the record is stored.
    fn set_identity(&mut self, identity: i64);

    /// The record's field values, including subtable fields.
    fn to_record(&self) -> ValueRecord;

    /// Builds a record from field values read from the database.
    fn load(record: ValueRecord) -> Result<Self>;

    fn id() -> ModelId {
        ModelId::of::<Self>()
    }

    fn record_type() -> RecordType {
        RecordType::new(Self::id(), Self::schema)
    }

    /// The declared type of a field holding a record of this type.
    fn field_type() -> FieldType {
        FieldType::Record(Self::record_type())
    }

    /// This record as a foreign-key filter operand.
    fn record_ref(&self) -> RecordRef {
        RecordRef::new(Self::id(), self.identity())
    }
}
