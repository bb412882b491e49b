use crate::Record;

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};
use tiny_orm_core::stmt::{Operand, RecordRef, Value};

/// The identity of a stored record of type `R`.
///
/// Fields declared as `Id<R>` become foreign-key columns referencing `R`'s
/// identity column.
pub struct Id<R> {
    id: i64,
    _p: PhantomData<fn() -> R>,
}

impl<R> Id<R> {
    pub const fn new(id: i64) -> Self {
        Self {
            id,
            _p: PhantomData,
        }
    }

    pub const fn get(&self) -> i64 {
        self.id
    }
}

impl<R: Record> Id<R> {
    /// This identity as a foreign-key filter operand.
    pub fn record_ref(&self) -> RecordRef {
        RecordRef::new(R::id(), Some(self.id))
    }
}

impl<R> Clone for Id<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Id<R> {}

impl<R> PartialEq for Id<R> {
    fn eq(&self, rhs: &Self) -> bool {
        self.id == rhs.id
    }
}

impl<R> Eq for Id<R> {}

impl<R> Hash for Id<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<R> fmt::Debug for Id<R> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(fmt)
    }
}

impl<R> fmt::Display for Id<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<R> From<Id<R>> for Value {
    fn from(value: Id<R>) -> Self {
        Self::I64(value.id)
    }
}

impl<R> From<&Id<R>> for Value {
    fn from(value: &Id<R>) -> Self {
        Self::I64(value.id)
    }
}

impl<R: Record> From<Id<R>> for Operand {
    fn from(value: Id<R>) -> Self {
        Self::Record(value.record_ref())
    }
}
