//! Indented, human-readable rendering of views and the values they return.
//!
//! A type takes part by implementing [`Pretty`] and describing its runtime
//! [`Shape`]. Views describe themselves as [`Shape::Object`] with one
//! [`Accessor`] per typed accessor; the printer sorts them by name, calls each
//! one and renders the outcome:
//!
//! - `Ok(value)`: the value, rendered recursively.
//! - `NullValue` failure: `null`.
//! - `FieldNotFound` failure: the field is left out.
//! - any other failure: `error: <message>`.
//!
//! Output for a view with accessors `Adult`, `GenreIDs` and `Title`:
//!
//! ```text
//! {
//!   Adult: false,
//!   GenreIDs: [
//!     0: 1,
//!     1: 2,
//!   ],
//!   Title: null,
//! }
//! ```

use serde_json::Value;
use tracing::trace;

use crate::error::{ErrorKind, Result};

/// Runtime shape of a value, as seen by [`render`].
pub enum Shape<'a> {
    Object(Vec<Accessor<'a>>),
    Array(Vec<&'a dyn Pretty>),
    Bool(bool),
    Integer(i128),
    Float(f64),
    Text(&'a str),
    Null,
    /// Carries the type name printed in place of the value.
    Unsupported(&'static str),
}

/// A named, deferred call to one accessor of a view.
pub struct Accessor<'a> {
    name: &'static str,
    get: Box<dyn FnOnce() -> Result<Box<dyn Pretty + 'a>> + 'a>,
}

impl<'a> Accessor<'a> {
    /// Pairs `name` with a call that produces the field's value.
    pub fn new<T, F>(name: &'static str, f: F) -> Self
    where
        T: Pretty + 'a,
        F: FnOnce() -> Result<T> + 'a,
    {
        Self {
            name,
            get: Box::new(move || f().map(|value| Box::new(value) as Box<dyn Pretty + 'a>)),
        }
    }

    /// Name the field is printed under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the accessor.
    pub fn call(self) -> Result<Box<dyn Pretty + 'a>> {
        (self.get)()
    }
}

/// A value [`render`] can print.
pub trait Pretty {
    /// Describes how this value is printed.
    fn shape(&self) -> Shape<'_>;
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n  ")
}

/// Shortest round-trip form; exponent notation below `1e-4` and from `1e21`.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let magnitude = f.abs();
    if magnitude == 0.0 || (1e-4..1e21).contains(&magnitude) {
        return f.to_string();
    }
    let exp_form = format!("{f:e}");
    match exp_form.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => exp_form,
    }
}

/// Renders `value` as indented text. Never fails.
pub fn render<P: Pretty + ?Sized>(value: &P) -> String {
    match value.shape() {
        Shape::Object(mut accessors) => {
            accessors.sort_by(|a, b| a.name.cmp(b.name));
            let mut out = String::from("{\n");
            for accessor in accessors {
                let name = accessor.name;
                let rendered = match accessor.call() {
                    Ok(value) => indent(&render(&*value)),
                    Err(err) => match err.kind() {
                        ErrorKind::NullValue => "null".to_string(),
                        ErrorKind::FieldNotFound => {
                            trace!(accessor = name, "omitting missing field");
                            continue;
                        }
                        ErrorKind::CannotConvert | ErrorKind::Other => {
                            trace!(accessor = name, error = %err, "rendering accessor failure");
                            format!("error: {err}")
                        }
                    },
                };
                out.push_str(&format!("  {name}: {rendered},\n"));
            }
            out.push('}');
            out
        }
        Shape::Array(items) => {
            let mut out = String::from("[\n");
            for (index, item) in items.into_iter().enumerate() {
                out.push_str(&format!("  {index}: {},\n", indent(&render(item))));
            }
            out.push(']');
            out
        }
        Shape::Bool(b) => b.to_string(),
        Shape::Integer(n) => n.to_string(),
        Shape::Float(f) => format_float(f),
        Shape::Text(s) => Value::from(s).to_string(),
        Shape::Null => "null".to_string(),
        Shape::Unsupported(name) => format!("unsupported type: {name}"),
    }
}

impl Pretty for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

macro_rules! impl_pretty_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl Pretty for $int {
                fn shape(&self) -> Shape<'_> {
                    Shape::Integer(i128::from(*self))
                }
            }
        )*
    };
}

impl_pretty_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

// Not produced by any converter.
macro_rules! impl_pretty_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Pretty for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

impl_pretty_unsupported!(isize, usize, f32, char, ());

impl Pretty for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(*self)
    }
}

impl Pretty for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Pretty for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl<T: Pretty> Pretty for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(self.iter().map(|item| item as &dyn Pretty).collect())
    }
}

impl<T: Pretty> Pretty for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Pretty> Pretty for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Null,
        }
    }
}

impl<T: Pretty + ?Sized> Pretty for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Pretty + ?Sized> Pretty for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

/// An untyped object exposes no accessors and renders as an empty `{}` block.
impl Pretty for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Null,
            Value::Bool(b) => Shape::Bool(*b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Shape::Float(f),
                None => Shape::Unsupported("serde_json::Number"),
            },
            Value::String(s) => Shape::Text(s),
            Value::Array(items) => items.shape(),
            Value::Object(_) => Shape::Object(Vec::new()),
        }
    }
}
