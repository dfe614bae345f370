//! # Cinema Catalog Crate
//!
//! Business logic for the movie catalog. Services validate incoming
//! payloads, enforce catalog rules and delegate persistence to the
//! repositories of `cinema-database`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cinema_catalog::{MovieService, MovieFilter, CensorshipLevel};
//!
//! let service = MovieService::new(pool);
//! let movie = service.create(request).await?;
//! let censored = service
//!     .find(MovieFilter::by_censorship_level(CensorshipLevel::Censored))
//!     .await?;
//! ```

pub mod services;

pub use services::{ActorService, MovieRepo, MovieService};

pub use cinema_database::{
    Actor, CatalogError, CatalogResult, CensorshipLevel, CreateActorRequest, CreateMovieRequest,
    Movie, MovieFilter, ValidationErrors,
};
