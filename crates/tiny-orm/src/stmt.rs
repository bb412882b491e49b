mod id;
pub use id::Id;

mod primitive;
pub use primitive::Primitive;
