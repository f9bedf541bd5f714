use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configurable settings consumed when building the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Timezone offset from UTC in hours, used when stamping timeline
    /// entries (default +7 — WIB).
    pub utc_offset_hours: i32,

    /// Optional API keys for providers that require them.
    /// Keys: provider name (e.g., "currencyfreaks").
    /// Values: the API key string.
    pub api_keys: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            utc_offset_hours: 7,
            api_keys: HashMap::new(),
        }
    }
}
