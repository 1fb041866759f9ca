use reqwest::StatusCode;

use crate::{requests, responses};

/// An API client for interfacing with the movie-listing service.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl APIClient {
    /// Resolved URL of the listing endpoint for the given query options.
    ///
    /// This is the exact URL `list_movies` requests, so callers can echo it
    /// back to the user (the fetch hook stores it in its state).
    pub fn listing_url(&self, query: &requests::ListingQuery) -> String {
        let base = format!("{}/api/v2/list_movies.json", &self.address);
        match serde_urlencoded::to_string(query) {
            Ok(qs) if qs.is_empty() => base,
            Ok(qs) => format!("{base}?{qs}"),
            // Unreachable for the current field set (two optional
            // integers always serialize).
            Err(error) => {
                tracing::debug!(
                    %error,
                    "listing query failed to serialize; requesting without options"
                );
                base
            }
        }
    }

    /// Fetch the movie listing.
    pub async fn list_movies(
        &self,
        query: &requests::ListingQuery,
    ) -> Result<responses::MovieListing, ClientError> {
        let response =
            self.inner_client.get(self.listing_url(query)).send().await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::ListingQuery;

    fn client() -> APIClient {
        APIClient {
            address: "https://yts.mx".to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn listing_url_without_options() {
        assert_eq!(
            client().listing_url(&ListingQuery::default()),
            "https://yts.mx/api/v2/list_movies.json"
        );
    }

    #[test]
    fn listing_url_with_options() {
        let query = ListingQuery {
            limit: Some(5),
            page: Some(2),
        };
        assert_eq!(
            client().listing_url(&query),
            "https://yts.mx/api/v2/list_movies.json?limit=5&page=2"
        );
    }

    #[test]
    fn listing_url_omits_unset_options() {
        let query = ListingQuery {
            limit: None,
            page: Some(3),
        };
        assert_eq!(
            client().listing_url(&query),
            "https://yts.mx/api/v2/list_movies.json?page=3"
        );
    }
}
