pub mod listing_status;

pub use listing_status::ListingStatus;
