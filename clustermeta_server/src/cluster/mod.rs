//! Cluster metadata service: set and list cluster status and environment.

pub(crate) mod router;
