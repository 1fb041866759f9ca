use payloads::{requests::ListingQuery, responses};
use yew::prelude::*;

use crate::contexts::use_api;

use super::{FetchHookReturn, use_fetch};

/// Hook to fetch the movie listing through the injected API client
#[hook]
pub fn use_movie_listing(
    query: ListingQuery,
) -> FetchHookReturn<responses::MovieListing> {
    let api = use_api();
    let url = api.client().listing_url(&query);
    let fetch_api = api.clone();

    use_fetch((api, query), url, move || {
        let api = fetch_api.clone();
        async move {
            api.client()
                .list_movies(&query)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
