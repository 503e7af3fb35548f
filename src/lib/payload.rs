//! Serde helpers shared by the endpoint schemas. The partners API omits or
//! nulls counters it has no data for; those fields read as zero.

use serde::{Deserialize, Deserializer};

/// Treats `null` like a missing field and falls back to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
