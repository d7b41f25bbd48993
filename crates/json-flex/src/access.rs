//! Field and array accessors.

use serde_json::Value;
use tracing::trace;

use crate::convert::{convert_items, Converter};
use crate::error::{FlexError, Result};
use crate::value::Object;

/// Looks up `key` in `obj` and converts the stored value with `conv`.
///
/// Failures, in order of precedence:
/// - `obj` is `None`: [`FlexError::NullObject`], an unclassified failure.
/// - `key` is missing: [`FlexError::FieldNotFound`].
/// - `conv` rejects the value: [`FlexError::Field`] wrapping the converter's
///   failure, so its kind is still `CannotConvert` or `NullValue`.
pub fn get_field<T: 'static>(obj: Option<&Object>, key: &str, conv: &Converter<T>) -> Result<T> {
    let Some(obj) = obj else {
        trace!(key, "field access on null object");
        return Err(FlexError::NullObject {
            key: key.to_string(),
        });
    };
    let Some(value) = obj.get(key) else {
        trace!(key, "field not found");
        return Err(FlexError::FieldNotFound {
            key: key.to_string(),
        });
    };
    conv.convert(value).map_err(|err| {
        trace!(key, error = %err, "field conversion failed");
        FlexError::field(key, err)
    })
}

/// Converts every element of an already unwrapped array with `conv`.
pub fn from_array<T: 'static>(arr: &[Value], conv: &Converter<T>) -> Result<Vec<T>> {
    convert_items(arr, conv)
}
