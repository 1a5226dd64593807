//! Datastore to record clusters' metadata

pub mod surrealdb_client;

use ::core::future::Future;

use crate::cluster::{ClusterField, ClusterFilter, ClusterId, ClusterRecord};
use crate::error::Result;

/// Key-value store of cluster metadata.
/// Records are keyed by [ClusterId] and never deleted.
pub trait ClusterStore: Sized + Send + Sync + 'static {
    /// Return `Ok(None)` if the cluster does not exist
    fn get_cluster(
        &self,
        id: &ClusterId,
    ) -> impl Future<Output = Result<Option<ClusterRecord>>> + Send;

    /// Set `field` of the cluster to `value`.
    /// The cluster record is created if it does not exist yet.
    /// Writes are last-write-wins.
    fn update_cluster_field(
        &self,
        id: &ClusterId,
        field: ClusterField,
        value: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Create a new cluster record.
    /// # Return
    /// - `Ok(())` if the record is created.
    /// - `Err(_)` if the record already exists or any error occurs in the database.
    fn create_cluster(&self, record: ClusterRecord) -> impl Future<Output = Result<()>> + Send;

    /// Scan the whole table and return a sorted list of the ids of
    /// the clusters matching `filter`.
    fn scan_clusters(
        &self,
        filter: &ClusterFilter,
    ) -> impl Future<Output = Result<Vec<ClusterId>>> + Send;
}
