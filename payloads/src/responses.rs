use serde::{Deserialize, Serialize};

/// Envelope returned by the movie-listing endpoint.
///
/// The frontend only consumes the top-level `status` field ("ok" on
/// success); the movie payload itself is deliberately not modeled. Unknown
/// fields are ignored and a missing `status` decodes as empty, so any JSON
/// object the endpoint returns is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieListing {
    #[serde(default)]
    pub status: String,
}
