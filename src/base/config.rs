use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Name of the store table.
    pub table: String,
    pub input_mode: base::InputMode,
    /// Trailing window in days. 0 covers the whole history.
    pub window_days: base::Window,
    pub low_stock_threshold: i64,
    pub reset_mismatched_header: bool,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: "Sheet1".to_string(),
            input_mode: base::InputMode::default(),
            window_days: base::Window::WEEK,
            low_stock_threshold: base::stock::DEFAULT_LOW_STOCK_THRESHOLD,
            reset_mismatched_header: true,
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    /// Only a JSON object is a config; serde alone would also take an array.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str::<serde_json::Value>(s)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("config must be a JSON object"));
        }
        serde_json::from_value(value)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
