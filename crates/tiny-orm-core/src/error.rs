mod adhoc;
mod already_connected;
mod driver_operation_failed;
mod invalid_connection_url;
mod invalid_field_type;
mod invalid_foreign_key_value;
mod invalid_schema;
mod invalid_statement;
mod invalid_subtable_field;
mod missing_identity_field;
mod no_foreign_key_path;
mod not_a_record_type;
mod subtable_not_attached;
mod type_conversion;

use adhoc::AdhocError;
use already_connected::AlreadyConnected;
use driver_operation_failed::DriverOperationFailed;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_field_type::InvalidFieldType;
use invalid_foreign_key_value::InvalidForeignKeyValue;
use invalid_schema::InvalidSchema;
use invalid_statement::InvalidStatement;
use invalid_subtable_field::InvalidSubtableField;
use missing_identity_field::MissingIdentityField;
use no_foreign_key_path::NoForeignKeyPath;
use not_a_record_type::NotARecordType;
use std::sync::Arc;
use subtable_not_attached::SubtableNotAttached;
use type_conversion::TypeConversionError;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in tiny-orm.
///
/// Errors fall in three groups:
///
/// - configuration errors, raised while compiling or connecting a model
///   (missing identity field, invalid field type, bad subtable wiring);
/// - input errors, raised by a single call (wrong predicate value shape,
///   using a subtable that was never attached);
/// - storage errors, raised by the cursor and passed through untouched.
///
/// None of them are retried.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let Some(inner) = err.inner.as_mut() else {
            unreachable!()
        };

        match Arc::get_mut(inner) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // The consequent is shared or already has a cause; wrap it in a
            // fresh node so the chain is never rewritten.
            _ => Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
                    cause: Some(self),
                })),
            },
        }
    }

    /// Creates an ad-hoc error from format arguments. Used by [`bail!`] and
    /// [`err!`].
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error was raised while compiling or connecting
    /// a model, as opposed to during a single call.
    pub fn is_configuration(&self) -> bool {
        use self::ErrorKind::*;

        matches!(
            self.kind(),
            NotARecordType(_)
                | InvalidFieldType(_)
                | MissingIdentityField(_)
                | InvalidSubtableField(_)
                | AlreadyConnected(_)
                | NoForeignKeyPath(_)
                | InvalidSchema(_)
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    AlreadyConnected(AlreadyConnected),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidFieldType(InvalidFieldType),
    InvalidForeignKeyValue(InvalidForeignKeyValue),
    InvalidSchema(InvalidSchema),
    InvalidStatement(InvalidStatement),
    InvalidSubtableField(InvalidSubtableField),
    MissingIdentityField(MissingIdentityField),
    NoForeignKeyPath(NoForeignKeyPath),
    NotARecordType(NotARecordType),
    SubtableNotAttached(SubtableNotAttached),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AlreadyConnected(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidFieldType(err) => core::fmt::Display::fmt(err, f),
            InvalidForeignKeyValue(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            InvalidSubtableField(err) => core::fmt::Display::fmt(err, f),
            MissingIdentityField(err) => core::fmt::Display::fmt(err, f),
            NoForeignKeyPath(err) => core::fmt::Display::fmt(err, f),
            NotARecordType(err) => core::fmt::Display::fmt(err, f),
            SubtableNotAttached(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown tiny-orm error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
