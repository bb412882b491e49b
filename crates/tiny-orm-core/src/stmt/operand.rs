use super::Value;
use crate::schema::ModelId;
use indexmap::IndexMap;

/// Column filters for a predicate, in the order their clauses are emitted.
pub type Filters = IndexMap<String, Operand>;

/// The right-hand side of a column filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A scalar, `Null`, or a `List` of scalars and nulls
    Value(Value),

    /// A record instance, compared through its identity
    Record(RecordRef),

    /// Several record instances, compared through their identities
    Records(Vec<RecordRef>),
}

/// A record instance reduced to what a foreign-key comparison needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef {
    /// Model the record belongs to
    pub model: ModelId,

    /// Identity of the record, `None` when it has not been stored yet
    pub identity: Option<i64>,
}

impl RecordRef {
    pub fn new(model: ModelId, identity: Option<i64>) -> Self {
        Self { model, identity }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<RecordRef> for Operand {
    fn from(value: RecordRef) -> Self {
        Self::Record(value)
    }
}

impl From<Vec<RecordRef>> for Operand {
    fn from(value: Vec<RecordRef>) -> Self {
        Self::Records(value)
    }
}

macro_rules! impl_from_scalar {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Self::Value(value.into())
                }
            }

            impl From<Option<$t>> for Operand {
                fn from(value: Option<$t>) -> Self {
                    Self::Value(value.into())
                }
            }

            impl From<Vec<$t>> for Operand {
                fn from(value: Vec<$t>) -> Self {
                    Self::Value(value.into())
                }
            }

            impl From<Vec<Option<$t>>> for Operand {
                fn from(value: Vec<Option<$t>>) -> Self {
                    Self::Value(value.into())
                }
            }
        )+
    };
}

impl_from_scalar!(bool, i32, i64, f64, String, &str);
