use payloads::requests::ListingQuery;
use yew::prelude::*;

use crate::components::ListingStatus;
use crate::hooks::use_movie_listing;

#[function_component]
pub fn MoviesPage() -> Html {
    let listing = use_movie_listing(ListingQuery::default());

    let status = listing
        .state
        .data
        .as_ref()
        .map(|body| body.status.clone());

    html! {
        <ListingStatus
            status={status}
            is_loading={listing.state.loading}
            error={listing.state.error.clone()}
            source_url={listing.state.url.clone()}
            on_refetch={listing.refetch.clone()}
        />
    }
}
