//! json-flex - typed extraction from dynamically-typed JSON values.
//!
//! Decoded JSON arrives as [`serde_json::Value`]. This crate lets callers
//! define thin typed views over such data without a full schema:
//!
//! - [`convert`] holds [`Converter`]s, composable functions that validate one
//!   dynamic value and turn it into a typed one.
//! - [`access`] applies converters to object fields and arrays.
//! - [`value`] defines the [`View`] capability for named wrappers over an
//!   [`Object`], plus the [`view!`] declaration macro.
//! - [`pretty`] renders any [`Pretty`] value, including views, as an indented
//!   tree for diagnostics.
//!
//! ```
//! use json_flex::{as_int32, as_object, as_string, render, view, Accessor, Pretty, Result, Shape, View};
//! use serde_json::json;
//!
//! view! {
//!     pub struct Genre;
//! }
//!
//! impl Genre {
//!     pub fn id(&self) -> Result<i32> {
//!         self.field("id", &as_int32())
//!     }
//!
//!     pub fn name(&self) -> Result<String> {
//!         self.field("name", &as_string())
//!     }
//! }
//!
//! impl Pretty for Genre {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Object(vec![
//!             Accessor::new("Name", || self.name()),
//!             Accessor::new("ID", || self.id()),
//!         ])
//!     }
//! }
//!
//! let genre: Genre = as_object().convert(&json!({"id": 28, "name": "Action"})).unwrap();
//! assert_eq!(genre.id().unwrap(), 28);
//! assert_eq!(render(&genre), "{\n  ID: 28,\n  Name: \"Action\",\n}");
//! ```

pub mod access;
pub mod convert;
pub mod error;
pub mod pretty;
pub mod value;

pub use access::{from_array, get_field};
pub use convert::{
    as_any, as_array, as_bool, as_float64, as_int32, as_int64, as_integer, as_nullable,
    as_object, as_string, as_uint32, as_uint64, Converter, Integral,
};
pub use error::{ErrorKind, FlexError, Result};
pub use pretty::{render, Accessor, Pretty, Shape};
pub use value::{Array, Number, Object, View};
