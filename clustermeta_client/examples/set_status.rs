use ::clustermeta_client::{cluster_client::ClusterClient, Credentials};
use ::clustermeta_common::{cluster::ClusterId, tokio};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::Bearer { token: "admin" };
    let client = ClusterClient::new("http://[::1]:3000", Some(credentials));

    let id = ClusterId::try_from("k8s-prod-1")?;
    println!("{}", client.set_cluster_environment(&id, "prod").await?);
    println!("{}", client.set_cluster_status(&id, "active").await?);

    let active = client
        .clusters_and_status_per_environment("prod", "active")
        .await?;
    println!("Active clusters in prod: {:?}", active);
    Ok(())
}
