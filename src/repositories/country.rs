//! Country repository for database operations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::RepositoryError;
use crate::entities::country;

/// Read access to the country reference table.
#[async_trait]
pub trait CountryRepositoryTrait: Send + Sync {
    /// All countries, ordered by name.
    async fn all(&self) -> Result<Vec<country::Model>, RepositoryError>;

    /// Find one country by its ISO code.
    async fn find_by_code(&self, code: &str) -> Result<Option<country::Model>, RepositoryError>;
}

/// Repository for country-related database operations.
#[derive(Clone)]
pub struct CountryRepository {
    conn: DatabaseConnection,
}

impl CountryRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CountryRepositoryTrait for CountryRepository {
    async fn all(&self) -> Result<Vec<country::Model>, RepositoryError> {
        Ok(country::Entity::find()
            .order_by_asc(country::Column::Name)
            .all(&self.conn)
            .await?)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<country::Model>, RepositoryError> {
        Ok(country::Entity::find()
            .filter(country::Column::Code.eq(code))
            .one(&self.conn)
            .await?)
    }
}
