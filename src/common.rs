use serde::Deserialize;

/// Timestamps in the v3 API are RFC 3339 strings
pub type DateTime = chrono::DateTime<chrono::Utc>;

#[derive(Clone, Debug, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Oid(String);

impl Oid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
