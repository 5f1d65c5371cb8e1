//! Serde helpers for partial updates

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field of a partial update.
///
/// Use with `#[serde(default, deserialize_with = "...")]`: an absent key stays
/// `None` (leave unchanged), an explicit `null` becomes `Some(None)` (clear).
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
