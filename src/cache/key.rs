//! Cache key generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Identity of one logical request: endpoint plus serialized `input`.
///
/// The TTL is deliberately not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub hash: String,
    pub endpoint: String,
}

impl CacheKey {
    pub fn new(endpoint: &str, input: Option<&str>) -> Self {
        let mut parts: BTreeMap<&str, &str> = BTreeMap::new();
        parts.insert("endpoint", endpoint);
        if let Some(input) = input {
            parts.insert("input", input);
        }
        let canonical = serde_json::to_string(&parts).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect();
        Self {
            hash,
            endpoint: endpoint.to_string(),
        }
    }

    /// Key for an endpoint and structured payload, serialized as it goes on the wire.
    pub fn for_request(endpoint: &str, payload: Option<&Value>) -> Self {
        Self::new(endpoint, serialize_input(payload).as_deref())
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

/// Serializes a payload for the `input` query parameter.
///
/// Object keys come out sorted, so equal payloads always give the same
/// string. `None`, `null` and `{}` count as "no payload" and yield `None`.
pub fn serialize_input(payload: Option<&Value>) -> Option<String> {
    match payload {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) if map.is_empty() => None,
        Some(value) => Some(value.to_string()),
    }
}
