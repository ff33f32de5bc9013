//! Tri-state field for partial updates of nullable values.
//!
//! A JSON body can omit a key, send `null`, or send a value, and each of the
//! three means something different for a nullable column:
//!
//! | JSON            | Variant                  | Effect               |
//! |-----------------|--------------------------|----------------------|
//! | key missing     | [`FieldUpdate::Unchanged`] | keep current value |
//! | `"key": null`   | [`FieldUpdate::Cleared`]   | set to null        |
//! | `"key": value`  | [`FieldUpdate::Set`]       | overwrite          |
//!
//! Struct fields of this type must carry `#[serde(default)]` so a missing key
//! decodes as `Unchanged`.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Cleared,
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Merge this update onto the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Unchanged => current,
            FieldUpdate::Cleared => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Cleared,
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absence is handled by
        // `#[serde(default)]` on the containing field.
        Option::<T>::deserialize(deserializer).map(FieldUpdate::from)
    }
}
