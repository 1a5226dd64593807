//! End to end requests against the embedded in-memory database.

use ::axum_test::TestServer;
use ::clustermeta_common::{
    cluster::ClusterRecord, database::surrealdb_client::SurrealDBClient, error::*,
    serde_json::json, tokio,
};
use ::clustermeta_server::get_server;

async fn get_test_server() -> Result<TestServer> {
    let db = SurrealDBClient::create_embedded_db("k8s_clusters".to_owned()).await?;
    let app = get_server(None, db)?;
    TestServer::new(app).map_err(ClusterMetaError::fail_to_start_server)
}

/// a: prod/active, b: prod/inactive, c: dev/active
async fn seed(server: &TestServer) {
    for (name, environment, status) in [
        ("a", "prod", "active"),
        ("b", "prod", "inactive"),
        ("c", "dev", "active"),
    ] {
        server
            .post(&format!(
                "/cluster/environment?cluster_name={}&environment={}",
                name, environment
            ))
            .await
            .assert_status_ok();
        server
            .post(&format!(
                "/cluster/status?cluster_name={}&cluster_status={}",
                name, status
            ))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn set_then_get_status() -> Result<()> {
    let server = get_test_server().await?;

    server
        .post("/cluster/status?cluster_name=x&cluster_status=active")
        .await
        .assert_status_ok();

    let record: ClusterRecord = server.get("/cluster?cluster_name=x").await.json();
    assert_eq!(record.cluster_status.as_deref(), Some("active"));
    assert_eq!(record.environment, None);
    Ok(())
}

#[tokio::test]
async fn list_clusters_by_environment_and_status() -> Result<()> {
    let server = get_test_server().await?;
    seed(&server).await;

    server
        .get("/cluster/environment?environment=prod")
        .await
        .assert_json(&json!(["a", "b"]));
    server
        .get("/cluster/status?environment=prod&cluster_status=active")
        .await
        .assert_json(&json!(["a"]));
    server
        .get("/cluster/status?environment=dev&cluster_status=inactive")
        .await
        .assert_json(&json!([]));

    server
        .post("/cluster/status?cluster_name=b&cluster_status=maintenance")
        .await
        .assert_status_ok();
    server
        .get("/cluster/status?environment=prod&cluster_status=maintenance")
        .await
        .assert_json(&json!(["b"]));
    Ok(())
}

#[tokio::test]
async fn set_environment_twice() -> Result<()> {
    let server = get_test_server().await?;

    server
        .post("/cluster/environment?cluster_name=x&environment=dev")
        .await
        .assert_status_ok();
    let once: ClusterRecord = server.get("/cluster?cluster_name=x").await.json();
    server
        .post("/cluster/environment?cluster_name=x&environment=dev")
        .await
        .assert_status_ok();
    let twice: ClusterRecord = server.get("/cluster?cluster_name=x").await.json();

    assert_eq!(once, twice);
    Ok(())
}

#[tokio::test]
async fn register_then_set_status() -> Result<()> {
    let server = get_test_server().await?;

    server
        .post("/cluster?cluster_name=new")
        .text(r#"{"nodes": 3}"#)
        .await
        .assert_status_ok();
    server
        .post("/cluster?cluster_name=new")
        .await
        .assert_status(http::StatusCode::CONFLICT);
    server
        .post("/cluster/status?cluster_name=new&cluster_status=active")
        .await
        .assert_status_ok();

    server
        .get("/cluster?cluster_name=new")
        .await
        .assert_json(&json!({
            "id": "new",
            "cluster_status": "active",
            "environment": null,
            "config": r#"{"nodes": 3}"#
        }));
    Ok(())
}
