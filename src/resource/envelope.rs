//! Envelope codec
//!
//! The API wraps every payload in a single-key object named after the
//! resource: `{"account": {...}}` for one entity, `{"accounts": [...]}` for a
//! page of them. Outgoing change-sets use the singular form.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Borrowed value serialized as `{ key: inner }`
struct Wrapped<'a, T: ?Sized> {
    key: &'static str,
    inner: &'a T,
}

impl<T: Serialize + ?Sized> Serialize for Wrapped<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.inner)?;
        map.end()
    }
}

/// Serialize `inner` wrapped under `key`
pub fn wrap<T: Serialize + ?Sized>(key: &'static str, inner: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(&Wrapped { key, inner }).map_err(Error::Encode)
}

/// Decode a singular envelope
pub fn unwrap_one<T: DeserializeOwned>(body: &[u8], key: &'static str) -> Result<T> {
    let value = take(body, key)?;
    serde_json::from_value(value).map_err(Error::Decode)
}

/// Decode a collection envelope. A `null` collection decodes as empty.
pub fn unwrap_many<T: DeserializeOwned>(body: &[u8], key: &'static str) -> Result<Vec<T>> {
    let value = take(body, key)?;
    let items: Option<Vec<T>> = serde_json::from_value(value).map_err(Error::Decode)?;
    Ok(items.unwrap_or_default())
}

fn take(body: &[u8], key: &'static str) -> Result<Value> {
    let mut envelope: Map<String, Value> = serde_json::from_slice(body).map_err(Error::Decode)?;

    envelope
        .remove(key)
        .ok_or_else(|| Error::Decode(serde_json::Error::missing_field(key)))
}
