//! Configuration shared by the cluster metadata server and its tools.

use ::std::{fs::File, io::BufReader};

use ::clap::Parser;
use ::serde::{de::DeserializeOwned, Deserialize};
use ::serde_json::from_reader;

use crate::error::{ClusterMetaError, Result};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line arguments for the cluster metadata server.
pub struct Args {
    /// path to the config file
    #[arg(long)]
    pub config_path: String,
}

impl Args {
    /// helper function for exporting the `clap::Parser::parse` function
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

/// Credentials for signing in to the database.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Variant for user to choose the database type when creating the server
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub enum DatabaseVariant {
    /// In-memory database living in the server process. Data is lost on restart.
    Embedded,
    /// SurrealDB server, e.g. `ws://127.0.0.1:8000`
    Surreal { uri: String },
}

/// Where the cluster records are kept.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Table holding the cluster records, resolved once at startup.
    #[serde(default = "DatabaseConfig::default_table")]
    pub table: String,
    pub credentials: Option<Credentials>,
    pub variant: DatabaseVariant,
}

impl DatabaseConfig {
    fn default_table() -> String {
        "k8s_clusters".to_owned()
    }
}

/// Load a json config file into `T`.
pub fn load_config<T: DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(path).map_err(ClusterMetaError::fail_to_load_config)?;
    let reader = BufReader::new(file);
    let config = from_reader(reader).map_err(ClusterMetaError::fail_to_load_config)?;
    Ok(config)
}
