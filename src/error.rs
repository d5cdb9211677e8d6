use thiserror::Error;

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by [`Client`](crate::Client) calls and configuration loading.
///
/// A response with a non-200 status is not an error: operations report it as
/// an absent result (`Ok(None)`) with the status discarded. Only transport
/// failures, undecodable success bodies, and configuration problems reach
/// this enum.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be built or sent, or the connection failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 response body did not match the expected record shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A route response carried an empty `legs` array.
    #[error("route response contained no legs")]
    EmptyRoute,

    /// Credential or configuration resolution failed.
    #[error("configuration error: {0}")]
    Config(String),
}
