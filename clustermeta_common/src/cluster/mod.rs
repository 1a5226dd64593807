use ::serde::{Deserialize, Serialize};

mod cluster_id;

pub use cluster_id::ClusterId;

/// Free-form operational state of a cluster, e.g. `active`, `inactive`, `maintenance`.
pub type ClusterStatus = String;
/// Free-form classification of a cluster, e.g. `dev`, `stage`, `prod`.
pub type Environment = String;

/// Metadata of a cluster as kept in the store.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ClusterRecord {
    pub id: ClusterId,
    pub cluster_status: Option<ClusterStatus>,
    pub environment: Option<Environment>,
    /// Raw cluster configuration given at registration.
    pub config: Option<String>,
}

impl ClusterRecord {
    /// A record with only the id set.
    pub fn new(id: ClusterId) -> Self {
        Self {
            id,
            cluster_status: None,
            environment: None,
            config: None,
        }
    }
}

/// Field of a [ClusterRecord] that can be set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterField {
    ClusterStatus,
    Environment,
}

impl ClusterField {
    /// Name of the field in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClusterStatus => "cluster_status",
            Self::Environment => "environment",
        }
    }

    /// Human readable name, used in response messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClusterStatus => "status",
            Self::Environment => "environment",
        }
    }
}

/// Equality filter for scanning clusters.
/// `None` leaves the field unconstrained. A record without a constrained field never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterFilter {
    pub environment: Option<Environment>,
    pub cluster_status: Option<ClusterStatus>,
}

impl ClusterFilter {
    pub fn by_environment(environment: Option<Environment>) -> Self {
        Self {
            environment,
            cluster_status: None,
        }
    }

    pub fn by_environment_and_status(
        environment: Option<Environment>,
        cluster_status: Option<ClusterStatus>,
    ) -> Self {
        Self {
            environment,
            cluster_status,
        }
    }
}
