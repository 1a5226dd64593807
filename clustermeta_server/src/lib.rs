use ::std::{
    net::{Ipv6Addr, SocketAddr, SocketAddrV6},
    sync::Arc,
};

use ::axum::{extract::State, middleware, routing::get, Router};
use ::axum_extra::middleware::option_layer;
use ::clustermeta_common::{
    config::DatabaseConfig, database::ClusterStore, error::Result, serde::Deserialize,
};
use ::tower_http::trace::TraceLayer;
use authentication::{require_credentials, static_auth_provider::StaticAuthProvider};
use cluster::router::get_cluster_router;
use state::AppState;

pub mod authentication;
pub(crate) mod cluster;
pub(crate) mod error;
pub(crate) mod state;

/// Configuration for the cluster metadata server
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[serde(crate = "clustermeta_common::serde")]
pub struct ServerConfig {
    /// `None` disables authentication
    pub auth: Option<StaticAuthProvider>,
    /// Address to listen on, `[::1]:3000` by default
    #[serde(default = "ServerConfig::default_address")]
    pub address: SocketAddr,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    fn default_address() -> SocketAddr {
        SocketAddr::V6(SocketAddrV6::new(Ipv6Addr::LOCALHOST, 3000, 0, 0))
    }
}

/// This is the only entry for users to get the cluster metadata server.
/// # Return the router for the server
pub fn get_server<DB>(auth_provider: Option<StaticAuthProvider>, db: DB) -> Result<Router>
where
    DB: ClusterStore,
{
    let app_state = AppState::new(db);
    let auth_layer = auth_provider.map(|provider| {
        middleware::from_fn_with_state(
            Arc::new(provider),
            require_credentials::<StaticAuthProvider>,
        )
    });

    // only the cluster routes are guarded, `/` stays open for liveness checks
    let cluster_router = get_cluster_router().route_layer(option_layer(auth_layer));

    let router = Router::new()
        .route(
            "/",
            get(|_: State<AppState<DB>>| async { "welcome to clustermeta" }),
        )
        .nest("/cluster", cluster_router)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);
    Ok(router)
}
