//! Inbound parameter extraction and validation.

use std::collections::HashMap;

use thiserror::Error;

/// Query keys that must be present and non-empty on every relay request.
pub const REQUIRED_PARAMS: [&str; 4] = ["server", "tc", "uid1", "emote_id"];

/// One or more required keys were absent or empty.
///
/// The rejection always reports the full required set, so the error carries
/// no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required parameters")]
pub struct MissingParams;

/// Validated relay parameters extracted from an inbound query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoteParams {
    pub server: String,
    pub tc: String,
    pub uid1: String,
    pub uid2: Option<String>,
    pub uid3: Option<String>,
    pub uid4: Option<String>,
    pub uid5: Option<String>,
    pub emote_id: String,
}

impl EmoteParams {
    /// Parse and validate a raw query string.
    ///
    /// Duplicated keys follow URL-parsing convention: the last occurrence
    /// wins. A present-but-empty value counts as absent, for required and
    /// optional keys alike.
    pub fn from_query(query: &str) -> Result<Self, MissingParams> {
        let mut map: HashMap<String, String> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            map.insert(key.into_owned(), value.into_owned());
        }
        Self::from_map(&map)
    }

    fn from_map(map: &HashMap<String, String>) -> Result<Self, MissingParams> {
        let required = |key: &str| match map.get(key) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(MissingParams),
        };
        let optional = |key: &str| map.get(key).filter(|v| !v.is_empty()).cloned();

        Ok(Self {
            server: required("server")?,
            tc: required("tc")?,
            uid1: required("uid1")?,
            uid2: optional("uid2"),
            uid3: optional("uid3"),
            uid4: optional("uid4"),
            uid5: optional("uid5"),
            emote_id: required("emote_id")?,
        })
    }

    /// Present uids paired with their slot number, in ascending slot order.
    pub fn uids(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        [
            (1u8, Some(self.uid1.as_str())),
            (2, self.uid2.as_deref()),
            (3, self.uid3.as_deref()),
            (4, self.uid4.as_deref()),
            (5, self.uid5.as_deref()),
        ]
        .into_iter()
        .filter_map(|(slot, uid)| uid.map(|u| (slot, u)))
    }
}
