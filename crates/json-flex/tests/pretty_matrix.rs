//! Rendering of views, arrays and scalars.

mod fixtures_movie;

use fixtures_movie::{movie, Movie};
use json_flex::{render, View};
use serde_json::json;

#[test]
fn direct_object() {
    let movie = movie(json!({
        "adult": false,
        "title": null,
        "genre_ids": [1.0, 2.0, 3.0]
    }));
    let expected = "{
  Adult: false,
  GenreIDs: [
    0: 1,
    1: 2,
    2: 3,
  ],
  Title: null,
}";
    assert_eq!(render(&movie), expected);
    assert_eq!(movie.to_string(), expected);
}

#[test]
fn array_of_objects() {
    let movies = vec![movie(json!({
        "adult": false,
        "title": null,
        "genre_ids": [1, 2, 3]
    }))];
    assert_eq!(
        render(&movies),
        "[
  0: {
    Adult: false,
    GenreIDs: [
      0: 1,
      1: 2,
      2: 3,
    ],
    Title: null,
  },
]"
    );
}

#[test]
fn nested_views_and_visible_errors() {
    let movie = movie(json!({
        "id": 12.5,
        "title": "Inception",
        "genres": [{"id": 28, "name": "Action"}, {"id": 12}]
    }));
    assert_eq!(
        render(&movie),
        "{
  GenreNames: error: error converting field \"genres\": error converting item 1: field \"name\" does not exist in object,
  Genres: [
    0: {
      ID: 28,
      Name: \"Action\",
    },
    1: {
      ID: 12,
    },
  ],
  ID: error: error converting field \"id\": cannot convert 12.5 to i32 exactly,
  Title: \"Inception\",
}"
    );
}

#[test]
fn null_element_keeps_field_visible() {
    let movie = movie(json!({"genre_ids": [1, null, 3]}));
    assert_eq!(
        render(&movie),
        "{
  GenreIDs: error: error converting field \"genre_ids\": error converting item 1: cannot convert null to i32,
}"
    );
}

#[test]
fn nested_missing_key_keeps_field_visible() {
    let movie = movie(json!({"genres": [{"id": 28}]}));
    assert_eq!(
        render(&movie),
        "{
  GenreNames: error: error converting field \"genres\": error converting item 0: field \"name\" does not exist in object,
  Genres: [
    0: {
      ID: 28,
    },
  ],
}"
    );
}

#[test]
fn extreme_floats_use_exponent_form() {
    assert_eq!(
        render(&vec![1e21f64, 1e-7, 2.5]),
        "[\n  0: 1e+21,\n  1: 1e-07,\n  2: 2.5,\n]"
    );
}

#[test]
fn order_ignores_construction_order() {
    let a = movie(json!({"title": "x", "adult": true, "id": 1}));
    let b = movie(json!({"id": 1, "adult": true, "title": "x"}));
    assert_eq!(render(&a), render(&a));
    assert_eq!(render(&a), render(&b));
    assert_eq!(render(&a), "{\n  Adult: true,\n  ID: 1,\n  Title: \"x\",\n}");
}

#[test]
fn empty_view_renders_braces() {
    let empty = Movie::from_object(Default::default());
    assert_eq!(render(&empty), "{\n}");
}

#[test]
fn arrays_of_scalars() {
    let strings = vec!["string1".to_string(), "string2".into(), "string3".into()];
    assert_eq!(
        render(&strings),
        "[\n  0: \"string1\",\n  1: \"string2\",\n  2: \"string3\",\n]"
    );
    assert_eq!(render(&vec![1i32, 2, 3]), "[\n  0: 1,\n  1: 2,\n  2: 3,\n]");
    assert_eq!(
        render(&vec![1.1f64, 2.2, 3.3]),
        "[\n  0: 1.1,\n  1: 2.2,\n  2: 3.3,\n]"
    );
}

#[test]
fn unsupported_type() {
    assert_eq!(render(&42usize), "unsupported type: usize");
}
