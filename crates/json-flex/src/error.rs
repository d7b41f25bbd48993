//! Failure taxonomy shared by converters, accessors and the printer.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = FlexError> = std::result::Result<T, E>;

/// Classification of a [`FlexError`], checkable independently of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested key is absent from a present object.
    FieldNotFound,
    /// The value is present but has the wrong shape or range.
    CannotConvert,
    /// The value is an explicit JSON `null`.
    NullValue,
    /// Any failure without a named kind.
    Other,
}

/// Failure of a converter or accessor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlexError {
    /// The key is absent from a present object.
    #[error("field {key:?} does not exist in object")]
    FieldNotFound { key: String },
    /// The value has a JSON shape other than the one expected.
    #[error("cannot convert {found} to {expected}")]
    CannotConvert {
        found: &'static str,
        expected: &'static str,
    },
    /// The number is fractional or out of range for the integer type.
    #[error("cannot convert {value} to {expected} exactly")]
    Inexact { value: f64, expected: &'static str },
    /// The value is an explicit JSON `null`.
    #[error("cannot convert null to {expected}")]
    NullValue { expected: &'static str },
    /// A field was requested from an absent object.
    #[error("cannot access field {key:?} on null object")]
    NullObject { key: String },
    /// An array element failed to convert.
    #[error("error converting item {index}: {source}")]
    Item {
        index: usize,
        source: Box<FlexError>,
    },
    /// The value stored under a present key failed to convert.
    #[error("error converting field {key:?}: {source}")]
    Field { key: String, source: Box<FlexError> },
}

impl FlexError {
    /// Classifies the failure.
    ///
    /// A failing array element is always `CannotConvert`: the array itself is
    /// present. A failing field is `NullValue` only when its own value is
    /// null; a nested missing key or null never surfaces as `FieldNotFound` or
    /// `NullValue` for a key that exists.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FieldNotFound { .. } => ErrorKind::FieldNotFound,
            Self::CannotConvert { .. } | Self::Inexact { .. } => ErrorKind::CannotConvert,
            Self::NullValue { .. } => ErrorKind::NullValue,
            Self::NullObject { .. } => ErrorKind::Other,
            Self::Item { .. } => ErrorKind::CannotConvert,
            Self::Field { source, .. } => match source.as_ref() {
                Self::NullValue { .. } => ErrorKind::NullValue,
                nested => match nested.kind() {
                    ErrorKind::Other => ErrorKind::Other,
                    _ => ErrorKind::CannotConvert,
                },
            },
        }
    }

    /// Whether [`FlexError::kind`] is `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    pub(crate) fn item(index: usize, source: FlexError) -> Self {
        Self::Item {
            index,
            source: Box::new(source),
        }
    }

    pub(crate) fn field(key: &str, source: FlexError) -> Self {
        Self::Field {
            key: key.to_string(),
            source: Box::new(source),
        }
    }
}
