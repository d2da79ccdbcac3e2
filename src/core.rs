//! The `Core` service facade.
//!
//! `Core` bundles the reference-data repositories with the application
//! settings and exposes the lookup and formatting calls used by request
//! handlers and view renderers. Lookup misses degrade to safe defaults
//! (empty string, echoed input, `None`); only database faults surface as
//! errors.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::constants::{self, ConfigField};
use crate::currency;
use crate::entities::{country, country_state};
use crate::repositories::{
    CoreConfigRepository, CoreConfigRepositoryTrait, CountryRepository, CountryRepositoryTrait,
    CountryStateRepository, CountryStateRepositoryTrait,
};
use crate::storage::LocalStorage;
use crate::utils::datetime;

/// A locale presented as a selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    pub title: String,
    pub value: String,
}

/// Facade over reference data, configuration and formatting.
pub struct Core {
    countries: Arc<dyn CountryRepositoryTrait>,
    states: Arc<dyn CountryStateRepositoryTrait>,
    config: Arc<dyn CoreConfigRepositoryTrait>,
    settings: Config,
}

impl Core {
    /// Create a new facade from its three repository collaborators.
    pub fn new(
        countries: Arc<dyn CountryRepositoryTrait>,
        states: Arc<dyn CountryStateRepositoryTrait>,
        config: Arc<dyn CoreConfigRepositoryTrait>,
        settings: Config,
    ) -> Self {
        Self {
            countries,
            states,
            config,
            settings,
        }
    }

    /// Wire the facade to the database-backed repositories.
    pub fn from_storage(storage: &LocalStorage, settings: Config) -> Self {
        Self::new(
            Arc::new(CountryRepository::new(storage.conn.clone())),
            Arc::new(CountryStateRepository::new(storage.conn.clone())),
            Arc::new(CoreConfigRepository::new(storage.conn.clone())),
            settings,
        )
    }

    /// Library version string.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The active application settings.
    pub fn settings(&self) -> &Config {
        &self.settings
    }

    /// Retrieve all countries, ordered by name.
    pub async fn countries(&self) -> Result<Vec<country::Model>> {
        Ok(self.countries.all().await?)
    }

    /// Country name for a code, or an empty string when unknown.
    pub async fn country_name(&self, code: &str) -> Result<String> {
        let found = self.countries.find_by_code(code).await?;

        Ok(found.map(|c| c.name).unwrap_or_default())
    }

    /// State name for a code.
    ///
    /// Unknown codes echo the input back (unlike [`Self::country_name`],
    /// which yields an empty string); templates rely on this asymmetry to
    /// render free-form state values imported from external sources.
    pub async fn state_name(&self, code: &str) -> Result<String> {
        let found = self.states.find_by_code(code).await?;

        Ok(found.map_or_else(|| code.to_string(), |s| s.name))
    }

    /// Retrieve the states of one country, ordered by name.
    pub async fn states(&self, country_code: &str) -> Result<Vec<country_state::Model>> {
        Ok(self.states.find_by_country(country_code).await?)
    }

    /// Retrieve all states grouped by their country code.
    pub async fn grouped_states_by_countries(
        &self,
    ) -> Result<BTreeMap<String, Vec<country_state::Model>>> {
        let mut grouped: BTreeMap<String, Vec<country_state::Model>> = BTreeMap::new();

        for state in self.states.all().await? {
            grouped.entry(state.country_code.clone()).or_default().push(state);
        }

        Ok(grouped)
    }

    /// Find one state by country code and state code.
    pub async fn find_state_by_country_code(
        &self,
        country_code: &str,
        state_code: &str,
    ) -> Result<Option<country_state::Model>> {
        Ok(self.states.find_one(country_code, state_code).await?)
    }

    /// All known timezone identifiers as an identifier -> identifier map.
    pub fn timezones(&self) -> BTreeMap<String, String> {
        datetime::timezones()
    }

    /// Configured locales as selectable options, ordered by code.
    pub fn locales(&self) -> Vec<LocaleOption> {
        self.settings
            .app
            .available_locales
            .iter()
            .map(|(value, title)| LocaleOption {
                title: title.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Display symbol for a currency code, falling back to the code itself.
    pub fn currency_symbol(&self, code: &str) -> String {
        currency::symbol(code)
    }

    /// Format a price in the configured base currency.
    ///
    /// A missing price counts as zero.
    pub fn format_base_price(&self, price: Option<f64>) -> String {
        currency::format_price(price, &self.settings.app.base_currency)
    }

    /// Render a date string with the configured display format.
    pub fn format_date(&self, date: &str) -> String {
        datetime::format_date(date, &self.settings.display.date_format)
    }

    /// Render a date string with an explicit chrono format.
    pub fn format_date_as(&self, date: &str, format: &str) -> String {
        datetime::format_date(date, format)
    }

    /// Week boundary for the week containing `date`.
    ///
    /// `end == false` yields the Sunday on/before the date, `end == true`
    /// the Saturday on/after it, both as YYYY-MM-DD strings.
    pub fn week_range(&self, date: &str, end: bool) -> String {
        datetime::week_range(date, end)
    }

    /// Definition of a known system configuration field.
    pub fn config_field(&self, name: &str) -> Option<&'static ConfigField> {
        constants::config_field(name)
    }

    /// Stored value of a system configuration field.
    ///
    /// Values are JSON-decoded; plain strings written by older versions
    /// come back as `Value::String`. Fields with no stored row fall back
    /// to the field definition's default, then `None`.
    pub async fn config_data(&self, field: &str) -> Result<Option<Value>> {
        if let Some(row) = self.config.find_by_code(field).await? {
            return Ok(row.value.map(|raw| decode_value(&raw)));
        }

        Ok(constants::config_field(field)
            .and_then(|f| f.default)
            .map(|default| Value::String(default.to_string())))
    }

    /// Persist a system configuration value.
    pub async fn set_config_data(&self, field: &str, value: Option<Value>) -> Result<()> {
        let encoded = value.map(|v| v.to_string());
        self.config.upsert(field, encoded).await?;

        Ok(())
    }
}

fn decode_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
