use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Top-level shape of the knowledge document.
#[derive(Deserialize, Debug, Default)]
pub struct Catalog {
    #[serde(default, deserialize_with = "ordered_entries")]
    pub streams: Vec<(String, Entity)>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub professions: Vec<(String, Entity)>,
    #[serde(default, deserialize_with = "nullable")]
    pub government_jobs: GovernmentJobs,
    #[serde(
        default,
        rename = "Vocational",
        alias = "vocational",
        deserialize_with = "nullable"
    )]
    pub vocational: Vocational,
    #[serde(default, rename = "Diploma", alias = "diploma", deserialize_with = "nullable")]
    pub diploma: DiplomaRecord,
}

/// A text attribute that the document stores either as a sentence or as a list.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

/// College names grouped by category (e.g. "Government", "Private").
pub type CollegeMap = Vec<(String, Vec<String>)>;

/// A stream or profession. Every attribute is optional.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Entity {
    pub eligibility: Option<FieldValue>,
    pub exams: Option<FieldValue>,
    pub career_path: Option<FieldValue>,
    pub career_options: Option<FieldValue>,
    #[serde(default, deserialize_with = "optional_ordered_entries")]
    pub top_colleges: Option<CollegeMap>,
    pub skills_required: Option<FieldValue>,
    pub description: Option<FieldValue>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GovernmentJobs {
    #[serde(default, deserialize_with = "nullable")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub skills_required: Vec<String>,
    /// Exam names keyed by job type.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub exams: Vec<(String, Vec<String>)>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Vocational {
    #[serde(default, deserialize_with = "nullable")]
    pub courses: Vec<VocationalCourse>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct VocationalCourse {
    pub course_name: Option<String>,
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub career_options: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DiplomaRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub subjects: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub career_options: Vec<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub top_colleges: CollegeMap,
}

/// Reads `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a JSON object into its entries, keeping document order.
/// `null` yields no entries.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(self)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, T>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_option(EntriesVisitor(PhantomData))
}

/// Like `ordered_entries`, but `null` stays `None`.
fn optional_ordered_entries<'de, D, T>(
    deserializer: D,
) -> Result<Option<Vec<(String, T)>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct Entries<T>(Vec<(String, T)>);

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            ordered_entries(deserializer).map(Entries)
        }
    }

    Option::<Entries<T>>::deserialize(deserializer).map(|entries| entries.map(|e| e.0))
}
