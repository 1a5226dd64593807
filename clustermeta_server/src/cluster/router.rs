//! Restful API for cluster metadata.
//!
//! All operations take their parameters from the uri query string.

use ::axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use ::clustermeta_common::{
    anyhow::anyhow,
    cluster::{ClusterField, ClusterFilter, ClusterId, ClusterRecord},
    database::ClusterStore,
    error::ClusterMetaError,
    tracing::{debug, error, info},
    validation::{check_unique, require, validate_json, Params},
};

use crate::error::{ClusterMetaServerError, MessageResponse};
use crate::state::AppState;

type Result<T> = std::result::Result<T, ClusterMetaServerError>;

const CLUSTER_NAME: &str = "cluster_name";
const CLUSTER_STATUS: &str = "cluster_status";
const ENVIRONMENT: &str = "environment";

fn get_cluster_id(params: &Params) -> Result<ClusterId> {
    let name = require(params, CLUSTER_NAME)?;
    Ok(ClusterId::try_from(name.to_owned())?)
}

/// An empty value does not filter.
fn filter_value(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Upsert one field of a cluster. The store error is logged, not returned to the caller.
async fn set_cluster_field<DB: ClusterStore>(
    db: &DB,
    params: &Params,
    field: ClusterField,
) -> Result<Json<MessageResponse>> {
    let value = require(params, field.as_str())?;
    let id = get_cluster_id(params)?;
    let description = field.description();

    db.update_cluster_field(&id, field, value)
        .await
        .map_err(|e| {
            error!("Failed to update cluster {} for {}: {}", description, id, e);
            ClusterMetaError::fail_to_update_database(anyhow!(
                "Failed to update cluster {} for {}",
                description,
                id
            ))
        })?;
    info!("Updated cluster {} for {} to {}", description, id, value);
    Ok(MessageResponse::new(format!(
        "Updated cluster {} for {} to {}",
        description, id, value
    )))
}

async fn scan_clusters<DB: ClusterStore>(
    db: &DB,
    filter: ClusterFilter,
) -> Result<Json<Vec<ClusterId>>> {
    let ids = db.scan_clusters(&filter).await.map_err(|e| {
        error!("Failed to scan clusters with {:?}: {}", filter, e);
        ClusterMetaError::fail_to_read_database(anyhow!("Failed to list clusters"))
    })?;
    debug!("Found {} clusters matching {:?}", ids.len(), filter);
    Ok(Json(ids))
}

/// Set the status of a cluster, e.g. active, inactive, maintenance
async fn set_cluster_status<DB: ClusterStore>(
    State(state): State<AppState<DB>>,
    Query(params): Query<Params>,
) -> Result<Json<MessageResponse>> {
    set_cluster_field(state.get_db(), &params, ClusterField::ClusterStatus).await
}

/// Set the environment of a cluster, e.g. dev, stage, prod
async fn set_cluster_environment<DB: ClusterStore>(
    State(state): State<AppState<DB>>,
    Query(params): Query<Params>,
) -> Result<Json<MessageResponse>> {
    set_cluster_field(state.get_db(), &params, ClusterField::Environment).await
}

/// List ids of the clusters in the given environment.
async fn clusters_per_environment<DB: ClusterStore>(
    State(state): State<AppState<DB>>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<ClusterId>>> {
    let environment = require(&params, ENVIRONMENT)?;
    scan_clusters(
        state.get_db(),
        ClusterFilter::by_environment(filter_value(environment)),
    )
    .await
}

/// List ids of the clusters in the given environment and with the given status.
async fn clusters_and_status_per_environment<DB: ClusterStore>(
    State(state): State<AppState<DB>>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<ClusterId>>> {
    let environment = require(&params, ENVIRONMENT)?;
    let cluster_status = require(&params, CLUSTER_STATUS)?;
    scan_clusters(
        state.get_db(),
        ClusterFilter::by_environment_and_status(
            filter_value(environment),
            filter_value(cluster_status),
        ),
    )
    .await
}

async fn get_cluster<DB: ClusterStore>(
    State(state): State<AppState<DB>>,
    Query(params): Query<Params>,
) -> Result<Json<ClusterRecord>> {
    let id = get_cluster_id(&params)?;
    state
        .get_db()
        .get_cluster(&id)
        .await
        .map_err(|e| {
            error!("Failed to get cluster {}: {}", id, e);
            ClusterMetaError::fail_to_read_database(anyhow!("Failed to get cluster {}", id))
        })?
        .map(Json)
        .ok_or_else(|| ClusterMetaError::not_found(anyhow!("Cluster {} not found", id)).into())
}

/// Register a new cluster with its config in the request body.
/// The config is checked to be json, but an invalid one is still stored.
async fn register_cluster<DB: ClusterStore>(
    State(state): State<AppState<DB>>,
    Query(params): Query<Params>,
    config: String,
) -> Result<Json<MessageResponse>> {
    let id = get_cluster_id(&params)?;
    let db = state.get_db();

    let config = filter_value(&config);
    if let Some(config) = &config {
        validate_json(config);
    }
    if check_unique(db, &id).await.is_some() {
        return Err(
            ClusterMetaError::already_exists(anyhow!("Cluster {} already exists", id)).into(),
        );
    }

    let record = ClusterRecord {
        config,
        ..ClusterRecord::new(id.clone())
    };
    db.create_cluster(record).await.map_err(|e| {
        error!("Failed to register cluster {}: {}", id, e);
        ClusterMetaError::fail_to_update_database(anyhow!("Failed to register cluster {}", id))
    })?;
    info!("Registered cluster {}", id);
    Ok(MessageResponse::new(format!("Registered cluster {}", id)))
}

pub(crate) fn get_cluster_router<DB: ClusterStore>() -> Router<AppState<DB>> {
    Router::new()
        .route("/", get(get_cluster::<DB>).post(register_cluster::<DB>))
        .route(
            "/status",
            get(clusters_and_status_per_environment::<DB>).post(set_cluster_status::<DB>),
        )
        .route(
            "/environment",
            get(clusters_per_environment::<DB>).post(set_cluster_environment::<DB>),
        )
}
