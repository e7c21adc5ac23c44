//! Movie model as handed to the card by the lookup layer.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::{CardError, Result};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    #[serde(default, deserialize_with = "optional_field")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_field")]
    pub rated: Option<String>,
    #[serde(default, deserialize_with = "optional_field")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "optional_field")]
    pub imdb_rating: Option<String>,
    #[serde(default, deserialize_with = "optional_field")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "optional_field")]
    pub actors: Option<String>,
    #[serde(default, alias = "plot", deserialize_with = "optional_field")]
    pub overview: Option<String>,
    #[serde(default, alias = "genre", deserialize_with = "genre_list")]
    pub genres: Vec<String>,
    #[serde(default, alias = "poster", rename = "posterURL", deserialize_with = "optional_field")]
    pub poster_url: Option<String>,
}

impl Movie {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CardError::json("movie", e))
    }

    /// `year • rated • runtime`, shown only when both year and rating exist.
    pub fn meta_line(&self) -> Option<String> {
        let (year, rated) = (self.year.as_deref()?, self.rated.as_deref()?);
        let mut parts = vec![year, rated];
        if let Some(runtime) = self.runtime.as_deref() {
            parts.push(runtime);
        }
        Some(parts.join(" • "))
    }

    pub fn credit_line(&self) -> Option<String> {
        self.director.as_ref().map(|d| format!("Directed by {d}"))
    }
}

/// Blank strings and OMDb's "N/A" mean the field is absent.
fn optional_field<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let v = v.trim();
        (!v.is_empty() && v != "N/A").then(|| v.to_string())
    }))
}

fn genre(raw: &str) -> Option<String> {
    let g = raw.trim();
    (!g.is_empty() && g != "N/A").then(|| g.to_string())
}

/// Genres arrive either as a JSON array or as one comma-separated string.
fn genre_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GenreVisitor;

    impl<'de> Visitor<'de> for GenreVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of genres or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(v.split(',').filter_map(genre).collect())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
            let mut genres = Vec::new();
            while let Some(raw) = seq.next_element::<String>()? {
                genres.extend(genre(&raw));
            }
            Ok(genres)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(GenreVisitor)
}
