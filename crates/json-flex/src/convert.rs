//! Converter combinators.
//!
//! A [`Converter`] validates one dynamic [`Value`] and turns it into a typed
//! result. Converters hold no state, are cheap to clone and compose: the array
//! converter wraps an element converter, the object converter produces any
//! [`View`] kind.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{FlexError, Result};
use crate::value::View;

/// A reusable function from a dynamic value to `T` or a classified failure.
pub struct Converter<T> {
    f: Arc<dyn Fn(&Value) -> Result<T> + Send + Sync>,
}

impl<T> Clone for Converter<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Converter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converter<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Converter<T> {
    /// Wraps a conversion function, for custom converters.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<T> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Applies the converter to one dynamic value.
    pub fn convert(&self, value: &Value) -> Result<T> {
        (self.f)(value)
    }

    /// Transforms a successful result.
    pub fn map<U, F>(self, f: F) -> Converter<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Converter::new(move |value| self.convert(value).map(&f))
    }

    /// Chains a fallible step after a successful conversion.
    pub fn and_then<U, F>(self, f: F) -> Converter<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + Send + Sync + 'static,
    {
        Converter::new(move |value| self.convert(value).and_then(&f))
    }
}

/// Name of the JSON shape of `value`, used in failure messages.
pub(crate) fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(value: &Value, expected: &'static str) -> FlexError {
    match value {
        Value::Null => FlexError::NullValue { expected },
        other => FlexError::CannotConvert {
            found: shape_name(other),
            expected,
        },
    }
}

/// Accepts JSON booleans only; `"true"` is not a boolean.
pub fn as_bool() -> Converter<bool> {
    Converter::new(|value| match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(other, "bool")),
    })
}

/// Accepts JSON strings only.
pub fn as_string() -> Converter<String> {
    Converter::new(|value| match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(other, "string")),
    })
}

/// Accepts JSON numbers. This is the base for every integral converter.
pub fn as_float64() -> Converter<f64> {
    Converter::new(|value| match value {
        Value::Number(n) => n.as_f64().ok_or(FlexError::CannotConvert {
            found: "number",
            expected: "f64",
        }),
        other => Err(mismatch(other, "f64")),
    })
}

/// Accepts any value, including null, and returns a copy of it.
pub fn as_any() -> Converter<Value> {
    Converter::new(|value| Ok(value.clone()))
}

/// Fixed-width integers reachable through [`as_integer`].
pub trait Integral: Copy + TryFrom<i128> + Send + Sync + 'static {
    /// Type name used in failure messages.
    const NAME: &'static str;

    /// Widens back to `f64` for the round-trip check.
    fn to_f64(self) -> f64;
}

macro_rules! impl_integral {
    ($($int:ty),* $(,)?) => {
        $(
            impl Integral for $int {
                const NAME: &'static str = stringify!($int);

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Converts a JSON number to `T` only if it round-trips exactly.
///
/// The number must be in range for `T` and, converted to `T` and back, must
/// reproduce the original `f64` bit for bit. Fractions, out-of-range values,
/// NaN, infinities and `-0.0` are rejected.
pub fn as_integer<T: Integral>() -> Converter<T> {
    let base = as_float64();
    Converter::new(move |value| {
        let f = match value {
            Value::Number(_) => base.convert(value)?,
            other => return Err(mismatch(other, T::NAME)),
        };
        let inexact = || FlexError::Inexact {
            value: f,
            expected: T::NAME,
        };
        // `as` saturates, so anything past i128 fails the `try_from` below.
        let n = T::try_from(f as i128).map_err(|_| inexact())?;
        if n.to_f64().to_bits() != f.to_bits() {
            return Err(inexact());
        }
        Ok(n)
    })
}

/// [`as_integer`] for `i32`.
pub fn as_int32() -> Converter<i32> {
    as_integer()
}

/// [`as_integer`] for `i64`.
pub fn as_int64() -> Converter<i64> {
    as_integer()
}

/// [`as_integer`] for `u32`.
pub fn as_uint32() -> Converter<u32> {
    as_integer()
}

/// [`as_integer`] for `u64`.
pub fn as_uint64() -> Converter<u64> {
    as_integer()
}

/// Converts a JSON array element by element.
///
/// Stops at the first failing element and reports its index; no partial
/// result is returned.
pub fn as_array<T: 'static>(elem: Converter<T>) -> Converter<Vec<T>> {
    Converter::new(move |value| match value {
        Value::Array(items) => convert_items(items, &elem),
        other => Err(mismatch(other, "array")),
    })
}

pub(crate) fn convert_items<T: 'static>(items: &[Value], elem: &Converter<T>) -> Result<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| elem.convert(item).map_err(|err| FlexError::item(index, err)))
        .collect()
}

/// Wraps a JSON object as the view `V`. Fields are not validated here.
pub fn as_object<V: View + 'static>() -> Converter<V> {
    Converter::new(|value| match value {
        Value::Object(map) => Ok(V::from_object(map.clone())),
        other => Err(mismatch(other, "object")),
    })
}

/// Maps an explicit null to `None` and defers everything else to `inner`.
pub fn as_nullable<T: 'static>(inner: Converter<T>) -> Converter<Option<T>> {
    Converter::new(move |value| match value {
        Value::Null => Ok(None),
        other => inner.convert(other).map(Some),
    })
}
