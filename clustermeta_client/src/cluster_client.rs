use ::clustermeta_common::{
    cluster::{ClusterId, ClusterRecord},
    serde::Deserialize,
};

use crate::Credentials;

type Result<T> = std::result::Result<T, reqwest::Error>;

/// Body of the responses that only carry a message.
#[derive(Deserialize)]
#[serde(crate = "clustermeta_common::serde")]
struct MessageResponse {
    message: String,
}

/// Client for the cluster metadata server.
pub struct ClusterClient<'a> {
    /// Base URL of the cluster metadata server.
    base_url: &'a str,
    /// Credentials for authenticating with the server.
    credentials: Option<Credentials<'a>>,
    /// HTTP client for making requests to the server.
    client: reqwest::Client,
}

impl<'a> ClusterClient<'a> {
    /// Create a new `ClusterClient`.
    pub fn new(base_url: &'a str, credentials: Option<Credentials<'a>>) -> Self {
        Self {
            base_url,
            credentials,
            client: reqwest::Client::new(),
        }
    }

    /// Return the confirmation message of the server.
    pub async fn set_cluster_status(
        &self,
        id: &ClusterId,
        cluster_status: &str,
    ) -> Result<String> {
        let url = self.build_url("/cluster/status");
        let builder = self
            .client
            .post(url)
            .query(&[("cluster_name", id.as_str()), ("cluster_status", cluster_status)]);
        self.send_for_message(builder).await
    }

    /// Return the confirmation message of the server.
    pub async fn set_cluster_environment(
        &self,
        id: &ClusterId,
        environment: &str,
    ) -> Result<String> {
        let url = self.build_url("/cluster/environment");
        let builder = self
            .client
            .post(url)
            .query(&[("cluster_name", id.as_str()), ("environment", environment)]);
        self.send_for_message(builder).await
    }

    /// An empty `environment` lists all clusters.
    pub async fn clusters_per_environment(&self, environment: &str) -> Result<Vec<ClusterId>> {
        let url = self.build_url("/cluster/environment");
        let builder = self.client.get(url).query(&[("environment", environment)]);
        let builder = self.enable_auth_for_request(builder);
        builder.send().await?.error_for_status()?.json().await
    }

    pub async fn clusters_and_status_per_environment(
        &self,
        environment: &str,
        cluster_status: &str,
    ) -> Result<Vec<ClusterId>> {
        let url = self.build_url("/cluster/status");
        let builder = self
            .client
            .get(url)
            .query(&[("environment", environment), ("cluster_status", cluster_status)]);
        let builder = self.enable_auth_for_request(builder);
        builder.send().await?.error_for_status()?.json().await
    }

    pub async fn get_cluster(&self, id: &ClusterId) -> Result<ClusterRecord> {
        let url = self.build_url("/cluster");
        let builder = self.client.get(url).query(&[("cluster_name", id.as_str())]);
        let builder = self.enable_auth_for_request(builder);
        builder.send().await?.error_for_status()?.json().await
    }

    /// Register a new cluster, `config` is sent as the request body.
    pub async fn register_cluster(
        &self,
        id: &ClusterId,
        config: Option<String>,
    ) -> Result<String> {
        let url = self.build_url("/cluster");
        let builder = self.client.post(url).query(&[("cluster_name", id.as_str())]);
        let builder = match config {
            Some(config) => builder.body(config),
            None => builder,
        };
        self.send_for_message(builder).await
    }

    async fn send_for_message(&self, builder: reqwest::RequestBuilder) -> Result<String> {
        let builder = self.enable_auth_for_request(builder);
        let response: MessageResponse = builder.send().await?.error_for_status()?.json().await?;
        Ok(response.message)
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        self.base_url.to_owned() + path
    }

    /// Enable authentication for a request builder.
    fn enable_auth_for_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials {
            Some(Credentials::Basic { username, password }) => {
                builder.basic_auth(username, password)
            }
            Some(Credentials::Bearer { token }) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
