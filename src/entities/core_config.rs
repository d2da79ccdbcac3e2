//! Core config entity for persisted system configuration values.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "core_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Dotted field path, e.g. `general.base_currency`
    #[sea_orm(unique)]
    pub code: String,
    /// Stored value, JSON-encoded when structured
    pub value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
