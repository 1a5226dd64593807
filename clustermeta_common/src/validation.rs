//! Checks run on request parameters before the store is touched.

use ::std::collections::BTreeMap;

use ::anyhow::anyhow;
use ::tracing::{debug, warn};

use crate::cluster::{ClusterId, ClusterRecord};
use crate::database::ClusterStore;
use crate::error::{ClusterMetaError, Result};

/// Flat mapping of named string parameters supplied with a request.
pub type Params = BTreeMap<String, String>;

/// Return the value bound to `key`, or a missing parameter error naming the key.
pub fn require<'a>(params: &'a Params, key: &str) -> Result<&'a str> {
    params.get(key).map(String::as_str).ok_or_else(|| {
        ClusterMetaError::missing_parameter(anyhow!(
            "Must provide {} {} variable in uri query string",
            indefinite_article(key),
            key
        ))
    })
}

fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}

/// Whether `text` is valid json.
/// Invalid input is logged and never treated as an error.
pub fn validate_json(text: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => true,
        Err(e) => {
            warn!("Cluster config is not valid json: {}", e);
            false
        }
    }
}

/// Look up `id` in the store.
/// Return the existing record, or `None` if there is none.
/// A failed lookup is logged and also gives `None`.
pub async fn check_unique<DB: ClusterStore>(db: &DB, id: &ClusterId) -> Option<ClusterRecord> {
    match db.get_cluster(id).await {
        Ok(Some(record)) => {
            debug!("Cluster {} exists: {:?}", id, record);
            Some(record)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to look up cluster {}: {}", id, e);
            None
        }
    }
}
