use ::core::fmt::Display;
use ::std::{borrow::Cow, fmt};

use ::anyhow::anyhow;
use ::serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::error::{ClusterMetaError, Result};

/// Unique identifier of a cluster, chosen by the caller (the cluster name).
#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ClusterId {
    id: Cow<'static, str>,
}

impl ClusterId {
    pub fn new(id: Cow<'static, str>) -> Result<Self> {
        if id.is_empty() {
            Err(ClusterMetaError::illegal_argument(anyhow!(
                "Cluster name cannot be empty"
            )))
        } else {
            Ok(Self { id })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl<'de> Deserialize<'de> for ClusterId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_string(ClusterIdVisitor)
    }
}

struct ClusterIdVisitor;

impl Visitor<'_> for ClusterIdVisitor {
    type Value = ClusterId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-empty string representing a ClusterId")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        ClusterId::try_from(value.to_owned()).map_err(de::Error::custom)
    }
}

impl Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl TryFrom<String> for ClusterId {
    type Error = ClusterMetaError;
    fn try_from(id: String) -> Result<Self> {
        Self::new(Cow::Owned(id))
    }
}

impl TryFrom<&'static str> for ClusterId {
    type Error = ClusterMetaError;
    fn try_from(id: &'static str) -> Result<Self> {
        Self::new(Cow::Borrowed(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::serde_json::json;

    #[test]
    fn cluster_id_cannot_be_empty() {
        let result = ClusterId::try_from("");
        assert!(result.is_err_and(|e| e
            .to_string()
            .starts_with("Illegal argument: Cluster name cannot be empty")));
    }

    #[test]
    fn cannot_deserialize_empty_str_to_cluster_id() {
        let result: std::result::Result<ClusterId, _> = serde_json::from_value(json!(""));
        assert!(result.is_err_and(|e| e
            .to_string()
            .starts_with("Illegal argument: Cluster name cannot be empty")));
    }

    #[test]
    fn deserialize_cluster_id() -> anyhow::Result<()> {
        let result: ClusterId = serde_json::from_value(json!("k8s-prod-1"))?;
        assert_eq!(result, ClusterId::try_from("k8s-prod-1")?);
        Ok(())
    }

    #[test]
    fn serialize_cluster_id_as_plain_string() -> anyhow::Result<()> {
        let id = ClusterId::try_from("k8s-prod-1")?;
        assert_eq!(serde_json::to_value(&id)?, json!("k8s-prod-1"));
        Ok(())
    }
}
