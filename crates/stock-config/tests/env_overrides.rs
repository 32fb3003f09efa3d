//! Integration tests for environment variable overrides.

use figment::Jail;
use stock_config::StockConfig;

#[test]
fn env_vars_override_toml_values() {
    Jail::expect_with(|jail| {
        jail.create_dir(".stockpile")?;
        jail.create_file(
            ".stockpile/config.toml",
            r#"
[api]
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("STOCKPILE_API__BASE_URL", "https://from-env.example.com");

        let config: StockConfig = StockConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://from-env.example.com");
        Ok(())
    });
}

#[test]
fn nested_env_separator_maps_to_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("STOCKPILE_UI__PAGE_SIZE", "100");
        jail.set_env("STOCKPILE_API__TIMEOUT_SECS", "3");

        let config: StockConfig = StockConfig::figment().extract()?;
        assert_eq!(config.ui.page_size, 100);
        assert_eq!(config.api.timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn unprefixed_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("API__BASE_URL", "https://unprefixed.example.com");

        let config: StockConfig = StockConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "http://localhost:8000");
        Ok(())
    });
}
