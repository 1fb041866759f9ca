use serde::{Deserialize, Serialize};

/// Query options for the movie-listing endpoint.
///
/// Both knobs are optional; `Default` is the plain listing request the UI
/// hard-codes. `APIClient::listing_url` serializes set fields into the URL
/// query string and omits unset ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Results per page, 1 to 50 on the public API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}
