//! Country state repository for database operations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::RepositoryError;
use crate::entities::country_state;

/// Read access to the country-state reference table.
#[async_trait]
pub trait CountryStateRepositoryTrait: Send + Sync {
    /// All states, ordered by country code then name.
    async fn all(&self) -> Result<Vec<country_state::Model>, RepositoryError>;

    /// Find one state by its code alone, regardless of country.
    async fn find_by_code(&self, code: &str) -> Result<Option<country_state::Model>, RepositoryError>;

    /// All states of one country, ordered by name.
    async fn find_by_country(&self, country_code: &str)
        -> Result<Vec<country_state::Model>, RepositoryError>;

    /// Find one state by country code and state code.
    async fn find_one(
        &self,
        country_code: &str,
        code: &str,
    ) -> Result<Option<country_state::Model>, RepositoryError>;
}

/// Repository for state-related database operations.
#[derive(Clone)]
pub struct CountryStateRepository {
    conn: DatabaseConnection,
}

impl CountryStateRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CountryStateRepositoryTrait for CountryStateRepository {
    async fn all(&self) -> Result<Vec<country_state::Model>, RepositoryError> {
        Ok(country_state::Entity::find()
            .order_by_asc(country_state::Column::CountryCode)
            .order_by_asc(country_state::Column::Name)
            .all(&self.conn)
            .await?)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<country_state::Model>, RepositoryError> {
        Ok(country_state::Entity::find()
            .filter(country_state::Column::Code.eq(code))
            .one(&self.conn)
            .await?)
    }

    async fn find_by_country(
        &self,
        country_code: &str,
    ) -> Result<Vec<country_state::Model>, RepositoryError> {
        Ok(country_state::Entity::find()
            .filter(country_state::Column::CountryCode.eq(country_code))
            .order_by_asc(country_state::Column::Name)
            .all(&self.conn)
            .await?)
    }

    async fn find_one(
        &self,
        country_code: &str,
        code: &str,
    ) -> Result<Option<country_state::Model>, RepositoryError> {
        Ok(country_state::Entity::find()
            .filter(country_state::Column::CountryCode.eq(country_code))
            .filter(country_state::Column::Code.eq(code))
            .one(&self.conn)
            .await?)
    }
}
