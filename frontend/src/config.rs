use shared::TableConfig;
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "roulette_config";

/// Parses a stored table override. Fields left out keep their defaults.
pub fn parse_table_config(raw: &str) -> Result<TableConfig, String> {
    let config: TableConfig =
        serde_json::from_str(raw).map_err(|e| format!("Error parsing table config: {}", e))?;
    config.validate()?;
    Ok(config)
}

/// Table settings for this browser, falling back to the house defaults.
pub fn load_table_config() -> TableConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(raw) => parse_table_config(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring stored table config: {}", err);
            TableConfig::default()
        }),
        None => TableConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_keeps_missing_fields() {
        let config = parse_table_config(r#"{"betting_window_secs": 15}"#).unwrap();
        assert_eq!(config.betting_window_secs, 15);
        assert_eq!(config.starting_balance, 10_000);
    }

    #[test]
    fn test_rejects_bad_override() {
        assert!(parse_table_config("not json").is_err());
        assert!(parse_table_config(r#"{"chip_values": []}"#).is_err());
    }
}
