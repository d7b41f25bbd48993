//! Movie and genre views shared by the integration matrices.
#![allow(dead_code)]

use std::fmt;

use json_flex::{as_array, as_bool, as_int32, as_object, as_string, render, view, Object, View};
use serde_json::Value;

view! {
    pub struct Movie {
        "Adult" adult: bool = ("adult", as_bool()),
        "Title" title: String = ("title", as_string()),
        "ID" id: i32 = ("id", as_int32()),
        "GenreIDs" genre_ids: Vec<i32> = ("genre_ids", as_array(as_int32())),
        "Genres" genres: Vec<Genre> = ("genres", as_array(as_object::<Genre>())),
        "GenreNames" genre_names: Vec<String> = (
            "genres",
            as_array(as_object::<Genre>().and_then(|genre| genre.name()))
        ),
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

view! {
    pub struct Genre {
        "ID" id: i32 = ("id", as_int32()),
        "Name" name: String = ("name", as_string()),
    }
}

pub fn object(value: Value) -> Object {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

pub fn movie(value: Value) -> Movie {
    Movie::from_object(object(value))
}
