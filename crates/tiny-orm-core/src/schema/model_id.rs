use std::any::TypeId;
use std::fmt;

/// Identifies a record type, and therefore its compiled table model.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId {
    type_id: TypeId,
    type_name: &'static str,
}

impl ModelId {
    pub fn of<T: ?Sized + 'static>() -> ModelId {
        ModelId {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelId({})", self.type_name)
    }
}
