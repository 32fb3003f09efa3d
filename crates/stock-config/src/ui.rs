//! Console behavior configuration.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    20
}

const fn default_alert_poll_secs() -> u64 {
    30
}

const fn default_search_debounce_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Rows per page for list views.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Interval between active-alert count refreshes in watch mode.
    #[serde(default = "default_alert_poll_secs")]
    pub alert_poll_secs: u64,

    /// Quiet period before a search keystroke triggers a refetch.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            alert_poll_secs: default_alert_poll_secs(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = UiConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.alert_poll_secs, 30);
        assert_eq!(config.search_debounce_ms, 500);
    }
}
