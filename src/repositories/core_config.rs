//! Core config repository for database operations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter,
};

use super::RepositoryError;
use crate::entities::core_config;

/// Access to persisted system configuration values.
#[async_trait]
pub trait CoreConfigRepositoryTrait: Send + Sync {
    /// Find a stored configuration row by its dotted field path.
    async fn find_by_code(&self, code: &str) -> Result<Option<core_config::Model>, RepositoryError>;

    /// Insert or update a configuration value.
    async fn upsert(&self, code: &str, value: Option<String>)
        -> Result<core_config::Model, RepositoryError>;
}

/// Repository for persisted system configuration values.
#[derive(Clone)]
pub struct CoreConfigRepository {
    conn: DatabaseConnection,
}

impl CoreConfigRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CoreConfigRepositoryTrait for CoreConfigRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<core_config::Model>, RepositoryError> {
        Ok(core_config::Entity::find()
            .filter(core_config::Column::Code.eq(code))
            .one(&self.conn)
            .await?)
    }

    async fn upsert(
        &self,
        code: &str,
        value: Option<String>,
    ) -> Result<core_config::Model, RepositoryError> {
        if let Some(existing) = self.find_by_code(code).await? {
            let mut active = existing.into_active_model();
            active.value = ActiveValue::Set(value);
            return Ok(active.update(&self.conn).await?);
        }

        let row = core_config::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            value: ActiveValue::Set(value),
            ..Default::default()
        };

        Ok(row.insert(&self.conn).await?)
    }
}
