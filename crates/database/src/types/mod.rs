//! Shared types and result types for the database layer

pub mod errors;

pub use errors::{CatalogError, DatabaseError};

pub type DatabaseResult<T> = Result<T, DatabaseError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
