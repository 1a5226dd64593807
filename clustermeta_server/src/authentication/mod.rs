//! Access control for the `/cluster` routes.
//!
//! Only cluster metadata is guarded. The liveness route `/` answers without credentials.

use ::std::sync::Arc;

use ::axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use ::axum_extra::headers::authorization::{Basic, Bearer, Credentials as _};
use ::clustermeta_common::{
    anyhow::anyhow,
    error::{ClusterMetaError, Result},
    tracing::warn,
};

use crate::error::ClusterMetaServerError;

pub mod static_auth_provider;

/// Credentials presented by a caller of the cluster routes.
pub enum Credentials {
    Basic(Basic),
    Bearer(Bearer),
}

impl Credentials {
    /// Parse an `Authorization` header value. Only the Basic and Bearer schemes are accepted.
    fn from_header(value: &HeaderValue) -> Result<Self> {
        let unsupported =
            || ClusterMetaError::unauthorized(anyhow!("Unsupported authorization scheme"));
        let (scheme, _) = value
            .to_str()
            .ok()
            .and_then(|header| header.split_once(' '))
            .ok_or_else(unsupported)?;

        // the scheme is checked first, `decode` assumes the value starts with it
        let credentials = if scheme.eq_ignore_ascii_case(Basic::SCHEME) {
            Basic::decode(value).map(Self::Basic)
        } else if scheme.eq_ignore_ascii_case(Bearer::SCHEME) {
            Bearer::decode(value).map(Self::Bearer)
        } else {
            return Err(unsupported());
        };
        credentials.ok_or_else(|| {
            ClusterMetaError::unauthorized(anyhow!("Malformed {} credentials", scheme))
        })
    }
}

/// Decides whether the credentials grant access to cluster metadata.
pub trait Authenticate: Send + Sync + 'static {
    fn validate(&self, credentials: &Credentials) -> bool;
}

fn authenticate<P: Authenticate>(provider: &P, headers: &HeaderMap) -> Result<()> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ClusterMetaError::unauthorized(anyhow!("Missing authorization header")))?;
    let credentials = Credentials::from_header(value)?;
    if provider.validate(&credentials) {
        Ok(())
    } else {
        Err(ClusterMetaError::unauthorized(anyhow!("Invalid credentials")))
    }
}

/// Middleware rejecting requests to the cluster routes without valid credentials.
pub(crate) async fn require_credentials<P: Authenticate>(
    State(provider): State<Arc<P>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> std::result::Result<Response, ClusterMetaServerError> {
    match authenticate(provider.as_ref(), &headers) {
        Ok(()) => Ok(next.run(request).await),
        Err(e) => {
            warn!(
                "Rejected {} {}: {}",
                request.method(),
                request.uri().path(),
                e.get_cause()
            );
            Err(e.into())
        }
    }
}
