use ::clustermeta_common::{
    config::{load_config, Args},
    database::surrealdb_client::SurrealDBClient,
    error::{ClusterMetaError, Result},
    tokio,
    tracing::info,
    tracing_subscriber,
};
use ::clustermeta_server::{get_server, ServerConfig};

#[tokio::main]
/// Start the cluster metadata server
async fn main() -> Result<()> {
    // setup tracing
    tracing_subscriber::fmt::init();

    let Args { config_path } = Args::parse_args();
    info!("Loading config from {}", config_path);
    let ServerConfig {
        auth,
        address,
        database,
    } = load_config::<ServerConfig>(&config_path)?;

    // the table name is fixed for the lifetime of the process
    let db = SurrealDBClient::connect(&database).await?;
    let app = get_server(auth, db)?;

    // run it
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(ClusterMetaError::fail_to_start_server)?;
    info!(
        "Cluster metadata server is listening on {}",
        listener
            .local_addr()
            .map_err(ClusterMetaError::fail_to_start_server)?
    );
    axum::serve(listener, app)
        .await
        .map_err(ClusterMetaError::fail_to_start_server)?;
    Ok(())
}
