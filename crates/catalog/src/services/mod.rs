//! Business logic services for the movie catalog.

pub mod actor_service;
pub mod movie_service;

#[cfg(test)]
pub mod test_utils;

pub use actor_service::ActorService;
pub use movie_service::{MovieRepo, MovieService};
