pub mod cluster_client;

/// Credentials sent in the `Authorization` header of every request to the `/cluster` routes.
/// Needed only when the server is configured with `auth`.
pub enum Credentials<'a> {
    /// Username and password, checked against the server's `username` and `password`.
    Basic {
        username: &'a str,
        password: Option<&'a str>,
    },
    /// Token, checked against the server's `bearer_token`.
    Bearer { token: &'a str },
}
