#![allow(dead_code)]

use ::axum_test::TestServer;
use ::clustermeta_common::{
    cluster::{ClusterField, ClusterFilter, ClusterId, ClusterRecord},
    database::ClusterStore,
    error::*,
};
use ::clustermeta_server::{
    authentication::static_auth_provider::StaticAuthProvider, get_server,
};
use ::mockall::mock;

mock! {
    pub DB{}
    impl ClusterStore for DB {
        async fn get_cluster(&self, id: &ClusterId) -> Result<Option<ClusterRecord>>;
        async fn update_cluster_field(&self, id: &ClusterId, field: ClusterField, value: &str) -> Result<()>;
        async fn create_cluster(&self, record: ClusterRecord) -> Result<()>;
        async fn scan_clusters(&self, filter: &ClusterFilter) -> Result<Vec<ClusterId>>;
    }
}

pub static USERNAME: &str = "admin";
pub static PWD: &str = "admin";
pub static TOKEN: &str = "admin"; // Bearer token

pub async fn get_test_server(auth_enable: bool, db: MockDB) -> Result<TestServer> {
    let auth_provider = auth_enable.then(|| {
        StaticAuthProvider::new(USERNAME.to_owned(), PWD.to_owned(), TOKEN.to_owned())
    });
    let app = get_server(auth_provider, db)?;
    TestServer::new(app).map_err(ClusterMetaError::fail_to_start_server)
}

pub fn cluster_id(id: &'static str) -> ClusterId {
    ClusterId::try_from(id).unwrap()
}
