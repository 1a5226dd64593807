//! Client of SurrealDB

use ::serde::Serialize;
use ::surrealdb::{
    engine::any::{connect, Any},
    opt::auth::Root,
    Surreal,
};
use ::tracing::info;

use super::ClusterStore;
use crate::cluster::{ClusterField, ClusterFilter, ClusterId, ClusterRecord};
use crate::config::{Credentials, DatabaseConfig, DatabaseVariant};
use crate::error::{ClusterMetaError, Result};

/// Fields of a cluster record except the id, which is the record key.
#[derive(Serialize)]
struct ClusterContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<String>,
}

/// Client to interact with the database.
/// Store the metadata of clusters in one table, keyed by cluster id.
#[derive(Clone)]
pub struct SurrealDBClient {
    table: String,
    client: Surreal<Any>,
}

impl SurrealDBClient {
    const NAMESPACE: &'static str = "clustermeta";
    const DATABASE: &'static str = "clustermeta";

    /// Connect to the database described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        match &config.variant {
            DatabaseVariant::Embedded => Self::create_embedded_db(config.table.clone()).await,
            DatabaseVariant::Surreal { uri } => {
                Self::connect_remote_db(config.credentials.as_ref(), uri, config.table.clone())
                    .await
            }
        }
    }

    /// In-memory database living as long as the client.
    pub async fn create_embedded_db(table: String) -> Result<Self> {
        Self::open("mem://", None, table).await
    }

    /// Data store that connects to a SurrealDB server.
    /// `uri` carries the protocol, e.g. `ws://127.0.0.1:8000`.
    pub async fn connect_remote_db(
        credentials: Option<&Credentials>,
        uri: &str,
        table: String,
    ) -> Result<Self> {
        Self::open(uri, credentials, table).await
    }

    async fn open(uri: &str, credentials: Option<&Credentials>, table: String) -> Result<Self> {
        let client = connect(uri)
            .await
            .map_err(ClusterMetaError::fail_to_connect_database)?;
        if let Some(Credentials { username, password }) = credentials {
            client
                .signin(Root { username, password })
                .await
                .map_err(ClusterMetaError::fail_to_connect_database)?;
        }
        client
            .use_ns(Self::NAMESPACE)
            .use_db(Self::DATABASE)
            .await
            .map_err(ClusterMetaError::fail_to_connect_database)?;
        info!("Connected to database {}, table {}", uri, table);
        Ok(Self { table, client })
    }
}

impl ClusterStore for SurrealDBClient {
    async fn get_cluster(&self, id: &ClusterId) -> Result<Option<ClusterRecord>> {
        let sql = r#"
            SELECT record::id(id) AS id, cluster_status, environment, config
            FROM ONLY type::thing($tb, $id);
        "#;
        let record: Option<ClusterRecord> = self
            .client
            .query(sql)
            .bind(("tb", self.table.clone()))
            .bind(("id", id.to_string()))
            .await
            .map_err(ClusterMetaError::fail_to_read_database)?
            .take(0)
            .map_err(ClusterMetaError::fail_to_read_database)?;
        Ok(record)
    }

    async fn update_cluster_field(
        &self,
        id: &ClusterId,
        field: ClusterField,
        value: &str,
    ) -> Result<()> {
        // field names come from `ClusterField` only, values are always bound
        let sql = format!(
            "UPSERT type::thing($tb, $id) SET {} = $value RETURN NONE;",
            field.as_str()
        );
        self.client
            .query(sql)
            .bind(("tb", self.table.clone()))
            .bind(("id", id.to_string()))
            .bind(("value", value.to_owned()))
            .await
            .map_err(ClusterMetaError::fail_to_update_database)?
            .check()
            .map_err(ClusterMetaError::fail_to_update_database)?;
        Ok(())
    }

    async fn create_cluster(&self, record: ClusterRecord) -> Result<()> {
        let sql = r#"
            CREATE type::thing($tb, $id) CONTENT $content RETURN NONE;
        "#;
        let ClusterRecord {
            id,
            cluster_status,
            environment,
            config,
        } = record;
        self.client
            .query(sql)
            .bind(("tb", self.table.clone()))
            .bind(("id", id.to_string()))
            .bind((
                "content",
                ClusterContent {
                    cluster_status,
                    environment,
                    config,
                },
            ))
            .await
            .map_err(ClusterMetaError::fail_to_update_database)?
            .check()
            .map_err(ClusterMetaError::fail_to_update_database)?;
        Ok(())
    }

    async fn scan_clusters(&self, filter: &ClusterFilter) -> Result<Vec<ClusterId>> {
        let sql = r#"
            SELECT VALUE record::id(id) FROM type::table($tb)
            WHERE ($environment IS NONE OR environment = $environment)
            AND ($cluster_status IS NONE OR cluster_status = $cluster_status);
        "#;

        let ids: Vec<String> = self
            .client
            .query(sql)
            .bind(("tb", self.table.clone()))
            .bind(("environment", filter.environment.clone()))
            .bind(("cluster_status", filter.cluster_status.clone()))
            .await
            .map_err(ClusterMetaError::fail_to_read_database)?
            .take(0)
            .map_err(ClusterMetaError::fail_to_read_database)?;
        let mut ids: Vec<_> = ids
            .into_iter()
            .map(ClusterId::try_from)
            .collect::<Result<_>>()?;
        ids.sort();
        Ok(ids)
    }
}
