pub mod movies;

pub use movies::MoviesPage;
