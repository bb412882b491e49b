mod operand;
pub use operand::{Filters, Operand, RecordRef};

mod value;
pub use value::Value;

mod value_map;
pub use value_map::ValueMap;

mod value_record;
pub use value_record::ValueRecord;

use indexmap::IndexMap;

/// Named statement parameters, keyed by name without the leading `:`.
///
/// Order follows the order in which the serializer emitted placeholders.
pub type Params = IndexMap<String, Value>;
