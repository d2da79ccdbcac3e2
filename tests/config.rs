use crmbase::config::Config;
use crmbase::constants::DEFAULT_DATE_FORMAT;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.app.base_currency, "USD");
    assert_eq!(config.app.default_locale, "en");
    assert_eq!(config.app.available_locales.get("en"), Some(&"English".to_string()));
    assert_eq!(config.display.date_format, DEFAULT_DATE_FORMAT);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Currency codes must be 3 alphabetic characters
    config.app.base_currency = "US".to_string();
    assert!(config.validate().is_err());
    config.app.base_currency = "U5D".to_string();
    assert!(config.validate().is_err());

    // Reset and test locale consistency
    config.app.base_currency = "EUR".to_string();
    config.app.default_locale = "fr".to_string();
    assert!(config.validate().is_err());

    config.app.available_locales.insert("fr".to_string(), "Français".to_string());
    assert!(config.validate().is_ok());

    // Invalid chrono format specifier
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_locales_rejected() {
    let mut config = Config::default();
    config.app.available_locales.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_currency = \"USD\""));
    assert!(toml_str.contains("default_locale = \"en\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[app]
base_currency = "EUR"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Specified values are used
    assert_eq!(config.app.base_currency, "EUR");
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.app.default_locale, "en");
    assert!(config.app.available_locales.contains_key("en"));
    assert_eq!(config.display.date_format, DEFAULT_DATE_FORMAT);
}

#[test]
fn test_locale_map_deserialization() {
    let toml_str = r#"
[app]
base_currency = "USD"
default_locale = "de"

[app.available_locales]
de = "Deutsch"
en = "English"
"#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.app.available_locales.len(), 2);
    assert_eq!(config.app.available_locales.get("de"), Some(&"Deutsch".to_string()));
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.app.base_currency, default_config.app.base_currency);
    assert_eq!(config.display.date_format, default_config.display.date_format);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}
