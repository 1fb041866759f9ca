pub mod fetch_state;
pub mod use_fetch;
pub mod use_movie_listing;

pub use fetch_state::{FetchAction, FetchState};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_movie_listing::use_movie_listing;
