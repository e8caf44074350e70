use core::fmt::Display;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::prelude::*;

// Note: This method serializes to a String instead of a str in order to
// avoid a wasm compilation issue. Specifically, str (de)serialization hits
// some kind of f64/f32 case when compiled into wasm, but this fails
// validation on f32/f64 wasm runtimes.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.serialize_str(value.to_string().as_ref())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    T::from_str(<String>::deserialize(deserializer)?.as_str()).map_err(de::Error::custom)
}

/// Serializes `value` as canonical JSON: the value is first lifted into a
/// `serde_json::Value`, whose objects hold their keys sorted, and only then
/// rendered to bytes. Two equal values therefore always produce identical
/// bytes, no matter how their fields were populated.
pub fn canonical_json_bytes<T>(value: &T) -> Vec<u8>
where
    T: Serialize + ?Sized,
{
    let canonical = serde_json::to_value(value).expect("message types serialize to JSON");
    serde_json::to_vec(&canonical).expect("JSON values render to bytes")
}
