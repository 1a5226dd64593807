//! Error type shared by the cluster metadata crates.

use ::core::fmt::{self, Display};

use ::anyhow::Error;

pub type Result<T> = std::result::Result<T, ClusterMetaError>;

/// Kinds of failure. The server maps each kind to an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterMetaErrorType {
    MissingParameter,
    IllegalArgument,
    NotFound,
    AlreadyExists,
    Unauthorized,
    FailToConnectDatabase,
    FailToUpdateDatabase,
    FailToReadDatabase,
    FailToLoadConfig,
    FailToStartServer,
}

impl Display for ClusterMetaErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ClusterMetaErrorType::*;
        let s = match self {
            MissingParameter => "Missing parameter",
            IllegalArgument => "Illegal argument",
            NotFound => "Not found",
            AlreadyExists => "Already exists",
            Unauthorized => "Unauthorized",
            FailToConnectDatabase => "Fail to connect database",
            FailToUpdateDatabase => "Fail to update database",
            FailToReadDatabase => "Fail to read database",
            FailToLoadConfig => "Fail to load config",
            FailToStartServer => "Fail to start server",
        };
        f.write_str(s)
    }
}

/// Error with a type and the cause.
/// The cause is what callers of the service get to see, so keep it human readable.
#[derive(Debug)]
pub struct ClusterMetaError {
    error_type: ClusterMetaErrorType,
    cause: Error,
}

macro_rules! define_error_constructor {
    ($($name:ident => $error_type:ident),* $(,)?) => {
        impl ClusterMetaError {
            $(
                pub fn $name<E: Into<Error>>(cause: E) -> Self {
                    Self {
                        error_type: ClusterMetaErrorType::$error_type,
                        cause: cause.into(),
                    }
                }
            )*
        }
    };
}

define_error_constructor!(
    missing_parameter => MissingParameter,
    illegal_argument => IllegalArgument,
    not_found => NotFound,
    already_exists => AlreadyExists,
    unauthorized => Unauthorized,
    fail_to_connect_database => FailToConnectDatabase,
    fail_to_update_database => FailToUpdateDatabase,
    fail_to_read_database => FailToReadDatabase,
    fail_to_load_config => FailToLoadConfig,
    fail_to_start_server => FailToStartServer,
);

impl ClusterMetaError {
    pub fn get_error_type(&self) -> ClusterMetaErrorType {
        self.error_type
    }

    pub fn get_cause(&self) -> &Error {
        &self.cause
    }
}

impl Display for ClusterMetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.cause)
    }
}

impl std::error::Error for ClusterMetaError {}

impl<T> From<ClusterMetaError> for Result<T> {
    fn from(val: ClusterMetaError) -> Self {
        Result::Err(val)
    }
}

#[cfg(test)]
mod tests {
    use ::anyhow::anyhow;

    use super::*;

    #[test]
    fn display_error_with_type_prefix() {
        let error = ClusterMetaError::not_found(anyhow!("Cluster c1 not found"));
        assert_eq!(error.to_string(), "Not found: Cluster c1 not found");
    }

    #[test]
    fn keep_error_type_and_cause() {
        let error = ClusterMetaError::fail_to_update_database(anyhow!("throttled"));
        assert_eq!(
            error.get_error_type(),
            ClusterMetaErrorType::FailToUpdateDatabase
        );
        assert_eq!(error.get_cause().to_string(), "throttled");
    }

    #[test]
    fn convert_error_into_result() {
        let result: Result<()> = ClusterMetaError::unauthorized(anyhow!("no")).into();
        assert!(result.is_err_and(|e| e.get_error_type() == ClusterMetaErrorType::Unauthorized));
    }
}
