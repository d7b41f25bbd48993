//! Value model and the view capability.

use serde_json::{Map, Value};

use crate::access::get_field;
use crate::convert::Converter;
use crate::error::Result;

/// A JSON object: text keys to dynamic values.
pub type Object = Map<String, Value>;

/// A JSON array of dynamic values.
pub type Array = Vec<Value>;

/// A JSON number. Integral conversions are derived from it.
pub type Number = f64;

/// A named type sharing the [`Object`] shape, decorated with typed accessors.
///
/// A view owns its object and never validates fields up front. Each accessor
/// converts its field on demand, usually through [`View::field`].
pub trait View: Sized {
    /// Wraps `object` without validating it.
    fn from_object(object: Object) -> Self;

    /// The wrapped object.
    fn object(&self) -> &Object;

    /// Unwraps the object.
    fn into_object(self) -> Object;

    /// Looks up `key` in the wrapped object and converts it.
    fn field<T: 'static>(&self, key: &str, conv: &Converter<T>) -> Result<T> {
        get_field(Some(self.object()), key, conv)
    }

    /// Relabels the wrapped object as another view kind without copying it.
    ///
    /// Nothing is checked: accessors of the target view that do not match the
    /// data report their failures when called.
    fn reinterpret<V: View>(self) -> V {
        V::from_object(self.into_object())
    }
}

/// Declares a newtype view over [`Object`] and implements [`View`] for it.
///
/// The bare form only declares the view:
///
/// ```
/// json_flex::view! {
///     /// A movie record.
///     pub struct Movie;
/// }
/// ```
///
/// The braced form also lists accessors as `"Label" method: Type = (key,
/// converter)`. Each entry becomes a method reading `key` with `converter`,
/// and the same list backs the view's [`Pretty`](crate::Pretty) impl, printed
/// under `Label`.
///
/// ```
/// use json_flex::{as_array, as_bool, as_int32, as_object, render, view};
/// use serde_json::json;
///
/// view! {
///     pub struct Movie {
///         "Adult" adult: bool = ("adult", as_bool()),
///         "GenreIDs" genre_ids: Vec<i32> = ("genre_ids", as_array(as_int32())),
///     }
/// }
///
/// let movie: Movie = as_object()
///     .convert(&json!({"adult": true, "genre_ids": [7]}))
///     .unwrap();
/// assert_eq!(movie.genre_ids().unwrap(), vec![7]);
/// assert_eq!(
///     render(&movie),
///     "{\n  Adult: true,\n  GenreIDs: [\n    0: 7,\n  ],\n}"
/// );
/// ```
#[macro_export]
macro_rules! view {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $name($crate::Object);

        impl $crate::View for $name {
            fn from_object(object: $crate::Object) -> Self {
                Self(object)
            }

            fn object(&self) -> &$crate::Object {
                &self.0
            }

            fn into_object(self) -> $crate::Object {
                self.0
            }
        }

        impl ::core::convert::From<$crate::Object> for $name {
            fn from(object: $crate::Object) -> Self {
                Self(object)
            }
        }
    };
    (
        $(#[$meta:meta])* $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $label:literal $method:ident : $ty:ty = ($key:literal, $conv:expr)
            ),* $(,)?
        }
    ) => {
        $crate::view! {
            $(#[$meta])*
            $vis struct $name;
        }

        impl $name {
            $(
                $(#[$fmeta])*
                $vis fn $method(&self) -> $crate::Result<$ty> {
                    $crate::View::field(self, $key, &$conv)
                }
            )*
        }

        impl $crate::Pretty for $name {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Object(::std::vec![
                    $($crate::Accessor::new($label, || self.$method()),)*
                ])
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{as_int32, as_string};
    use crate::error::ErrorKind;
    use serde_json::json;

    crate::view! {
        struct Movie;
    }

    crate::view! {
        struct Genre;
    }

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    crate::view! {
        struct Rated {
            "Score" score: i32 = ("score", crate::convert::as_int32()),
            "Label" label: String = ("label", crate::convert::as_string()),
        }
    }

    #[test]
    fn accessor_list_drives_methods_and_rendering() {
        let rated = Rated::from(object(json!({"score": 9, "extra": true})));
        assert_eq!(rated.score().unwrap(), 9);
        assert_eq!(rated.label().unwrap_err().kind(), ErrorKind::FieldNotFound);
        assert_eq!(crate::pretty::render(&rated), "{\n  Score: 9,\n}");
    }

    #[test]
    fn field_reads_wrapped_object() {
        let movie = Movie::from(object(json!({"id": 12345, "title": "Inception"})));
        assert_eq!(movie.field("id", &as_int32()).unwrap(), 12345);
        assert_eq!(movie.field("title", &as_string()).unwrap(), "Inception");
    }

    #[test]
    fn reinterpret_keeps_fields() {
        let movie = Movie::from(object(json!({"id": 12345})));
        let genre: Genre = movie.reinterpret();
        assert_eq!(genre.field("id", &as_int32()).unwrap(), 12345);
        let err = genre.field("name", &as_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldNotFound);
        assert_eq!(genre.into_object().len(), 1);
    }
}
