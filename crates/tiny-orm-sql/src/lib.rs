mod predicate;
pub use predicate::Predicate;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;

pub use tiny_orm_core::stmt::Params;
