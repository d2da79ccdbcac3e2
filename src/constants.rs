//! Constants used throughout the application
//!
//! This module centralizes magic strings, default values and the system
//! configuration field definitions to improve maintainability and
//! consistency.

/// Default output format for [`crate::core::Core::format_date`]
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y %I:%M%p";

/// Default base currency code
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Default locale code
pub const DEFAULT_LOCALE: &str = "en";

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "crmbase.toml";

/// Directory name used under the XDG config and cache dirs
pub const APP_DIR_NAME: &str = "crmbase";

/// Log file name inside the cache directory
pub const LOG_FILE_NAME: &str = "crmbase.log";

/// Message printed after generating a default configuration file
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

/// Definition of a system configuration field.
///
/// Stored values live in the `core_config` table; the definitions below
/// describe the fields the application knows about and their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigField {
    /// Dotted field path, e.g. `general.base_currency`
    pub name: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Input type rendered by the admin UI
    pub field_type: &'static str,
    /// Default value when nothing is stored
    pub default: Option<&'static str>,
}

/// Known system configuration fields.
pub const CONFIG_FIELDS: &[ConfigField] = &[
    ConfigField {
        name: "general.locale",
        title: "Default Locale",
        field_type: "select",
        default: Some("en"),
    },
    ConfigField {
        name: "general.base_currency",
        title: "Base Currency",
        field_type: "select",
        default: Some("USD"),
    },
    ConfigField {
        name: "general.timezone",
        title: "Timezone",
        field_type: "select",
        default: Some("UTC"),
    },
    ConfigField {
        name: "general.date_format",
        title: "Date Format",
        field_type: "text",
        default: Some(DEFAULT_DATE_FORMAT),
    },
    ConfigField {
        name: "sales.fiscal_year_start",
        title: "Fiscal Year Start",
        field_type: "date",
        default: None,
    },
    ConfigField {
        name: "email.sender_name",
        title: "Email Sender Name",
        field_type: "text",
        default: None,
    },
    ConfigField {
        name: "email.sender_address",
        title: "Email Sender Address",
        field_type: "text",
        default: None,
    },
];

/// Look up a configuration field definition by its dotted name.
pub fn config_field(name: &str) -> Option<&'static ConfigField> {
    CONFIG_FIELDS.iter().find(|f| f.name == name)
}
