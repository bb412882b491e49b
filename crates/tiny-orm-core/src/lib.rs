#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod driver;
pub use driver::Cursor;

pub mod schema;
pub use schema::Registry;

pub mod stmt;

/// A Result type alias that uses tiny-orm's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
