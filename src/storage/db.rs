use anyhow::Result;
use log::info;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::entities::country;

/// Local storage manager for the reference database
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Initialize an in-memory `SQLite` database
    pub async fn new() -> Result<Self> {
        Self::open("sqlite::memory:").await
    }

    /// Open (or create) a database at the given connection URL
    pub async fn open(database_url: &str) -> Result<Self> {
        let conn = Database::connect(database_url).await?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS countries (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    code TEXT NOT NULL UNIQUE,
                    name TEXT NOT NULL
                )
                ",
            )
            .await?;

        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS country_states (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    country_code TEXT NOT NULL,
                    code TEXT NOT NULL,
                    name TEXT NOT NULL,
                    FOREIGN KEY (country_code) REFERENCES countries(code)
                )
                ",
            )
            .await?;

        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS core_config (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    code TEXT NOT NULL UNIQUE,
                    value TEXT
                )
                ",
            )
            .await?;

        info!("Reference database schema ready");
        Ok(())
    }

    /// Check if the database has any reference data
    pub async fn has_data(&self) -> Result<bool> {
        let count = country::Entity::find().count(&self.conn).await?;
        Ok(count > 0)
    }

    /// Clear all data from the database
    pub async fn clear_all_data(&self) -> Result<()> {
        self.conn.execute_unprepared("DELETE FROM country_states").await?;
        self.conn.execute_unprepared("DELETE FROM countries").await?;
        self.conn.execute_unprepared("DELETE FROM core_config").await?;
        Ok(())
    }
}
