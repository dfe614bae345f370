//! Entity definitions

pub mod actor;
pub mod censorship;
pub mod movie;

pub use actor::{Actor, CreateActorRequest, NewActor};
pub use censorship::{CensorshipLevel, UnknownCensorshipLevel};
pub use movie::{CreateMovieRequest, Movie, MovieFilter, NewMovie};
