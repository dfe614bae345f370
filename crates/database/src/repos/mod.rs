//! Repository implementations for data access

pub mod actor_repository;
pub mod movie_repository;

pub use actor_repository::ActorRepository;
pub use movie_repository::MovieRepository;
