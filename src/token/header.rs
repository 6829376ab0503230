use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// JWT header
///
/// Any JSON object is accepted. Members are kept in key order, so a header
/// built by [`TokenHeader::new`] always serializes to the same bytes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenHeader(BTreeMap<String, Value>);

impl TokenHeader {
    /// Header with `typ` set to `JWT` and `alg` set to `algorithm`
    pub fn new(algorithm: AlgorithmId) -> Self {
        let mut header = Self::default();
        header.insert("alg", algorithm.as_str());
        header.insert("typ", "JWT");
        header
    }

    /// The `alg` member, when it is a string
    pub fn algorithm(&self) -> Option<&str> {
        self.get_str("alg")
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(self.algorithm().unwrap_or_default())
    }

    /// The `typ` member, when it is a string
    pub fn token_type(&self) -> Option<&str> {
        self.get_str("typ")
    }

    /// The `kid` member, when it is a string
    pub fn key_id(&self) -> Option<&str> {
        self.get_str("kid")
    }

    /// Any member
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a member, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Members in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Serialization {
            segment: crate::error::Segment::Header,
            message: e.to_string(),
        })
    }

    fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}
