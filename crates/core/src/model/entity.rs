#![forbid(unsafe_code)]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Envelope shared by every record the backend returns.
///
/// `payload` is `None` when the store holds the entity but its content could not be
/// decoded into `P`. Such an entity exists; it is just unusable for rendering.
/// A missing or null `entityKey` decodes to an empty key; see [`Entity::has_key`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "P: DeserializeOwned"))]
pub struct Entity<P> {
    #[serde(default, deserialize_with = "lenient_key")]
    pub entity_key: String,
    #[serde(default, deserialize_with = "lenient_attributes")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient_payload")]
    pub payload: Option<P>,
    #[serde(default, deserialize_with = "lenient_block")]
    pub expires_at_block: Option<String>,
}

impl<P> Entity<P> {
    pub fn key(&self) -> &str {
        &self.entity_key
    }

    /// Keyless rows can be shown but never selected or linked to.
    pub fn has_key(&self) -> bool {
        !self.entity_key.is_empty()
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_payload<'de, D, P>(deserializer: D) -> Result<Option<P>, D::Error>
where
    D: Deserializer<'de>,
    P: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !value.is_null())
        .and_then(|value| serde_json::from_value::<P>(value).ok()))
}

fn lenient_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_to_string).unwrap_or_default())
}

fn lenient_block<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_to_string))
}

fn lenient_attributes<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, value)| scalar_to_string(value).map(|value| (name, value)))
        .collect())
}
