//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database
//! queries, following the Data Mapper pattern recommended by SeaORM.
//! Each repository implements a narrow trait ("find by field", "find all")
//! so the [`crate::core::Core`] facade can be exercised against in-memory
//! fakes in tests.

pub mod core_config;
pub mod country;
pub mod country_state;

pub use core_config::{CoreConfigRepository, CoreConfigRepositoryTrait};
pub use country::{CountryRepository, CountryRepositoryTrait};
pub use country_state::{CountryStateRepository, CountryStateRepositoryTrait};

/// Common error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
