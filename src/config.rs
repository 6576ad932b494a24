//! Deployment configuration for the catalog API client.
//!
//! Values resolve in three layers: built-in defaults, an optional `key=value`
//! configuration text, then environment overrides (`EVENTFEED_API_URL`,
//! `EVENTFEED_PAGE_SIZE`, `EVENTFEED_DEBOUNCE_MS`, `EVENTFEED_TIMEOUT_SECS`).

use tokio::time::Duration;

/// Connection and behavior settings supplied by the embedding application.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without a trailing endpoint path.
    pub base_url: String,
    /// Page size requested from the paginated endpoints.
    pub page_size: u32,
    /// Quiet period for debounced free-text input, in milliseconds.
    pub debounce_ms: u64,
    /// Transport-level request timeout, in seconds. Timeout semantics live
    /// entirely here; the controller imposes none of its own.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            page_size: 10,
            debounce_ms: 500,
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Defaults with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var("EVENTFEED_API_URL")
            && !url.trim().is_empty()
        {
            cfg.base_url = url.trim().to_string();
        }
        if let Ok(v) = std::env::var("EVENTFEED_PAGE_SIZE")
            && let Ok(n) = v.trim().parse::<u32>()
            && n > 0
        {
            cfg.page_size = n;
        }
        if let Ok(v) = std::env::var("EVENTFEED_DEBOUNCE_MS")
            && let Ok(n) = v.trim().parse::<u64>()
        {
            cfg.debounce_ms = n;
        }
        if let Ok(v) = std::env::var("EVENTFEED_TIMEOUT_SECS")
            && let Ok(n) = v.trim().parse::<u64>()
            && n > 0
        {
            cfg.timeout_secs = n;
        }
        cfg
    }

    /// What: Apply `key=value` configuration text over the current values.
    ///
    /// Inputs:
    /// - `text`: Configuration lines; empty lines and lines starting with
    ///   `#`, `//`, or `;` are skipped
    ///
    /// Details:
    /// - Unknown keys and unparsable values are ignored so a partially
    ///   outdated file never blocks startup.
    pub fn apply_conf_str(&mut self, text: &str) {
        for line in text.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, value)) = parse_key_value(line) else {
                continue;
            };
            match key.as_str() {
                "api_url" | "base_url" => {
                    if !value.is_empty() {
                        self.base_url = value;
                    }
                }
                "page_size" => {
                    if let Ok(n) = value.parse::<u32>()
                        && n > 0
                    {
                        self.page_size = n;
                    }
                }
                "debounce_ms" => {
                    if let Ok(n) = value.parse::<u64>() {
                        self.debounce_ms = n;
                    }
                }
                "timeout_secs" => {
                    if let Ok(n) = value.parse::<u64>()
                        && n > 0
                    {
                        self.timeout_secs = n;
                    }
                }
                _ => {}
            }
        }
    }

    /// The debounce quiet period as a [`Duration`].
    #[must_use]
    pub const fn debounce_quiet(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Build the shared HTTP client with the configured transport timeout.
    ///
    /// # Errors
    /// Returns the underlying builder error when the TLS backend cannot be
    /// initialized.
    pub fn client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .build()
    }
}

/// Whether a configuration line is blank or a comment.
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// Split a `key=value` line on the first `=`, trimming both sides.
fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (key, value) = trimmed.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    /// What: Conf text overrides defaults; comments and junk are skipped.
    ///
    /// - Input: Conf string with comments, an unknown key, and overrides
    /// - Output: Overridden url/page size; other fields keep defaults
    fn conf_str_overrides_and_skips_junk() {
        let mut cfg = ApiConfig::default();
        cfg.apply_conf_str(
            "# deployment\n\
             api_url = https://api.example/v1\n\
             ; comment\n\
             page_size = 25\n\
             no_such_key = 1\n\
             not a pair\n",
        );
        assert_eq!(cfg.base_url, "https://api.example/v1");
        assert_eq!(cfg.page_size, 25);
        assert_eq!(cfg.debounce_ms, ApiConfig::default().debounce_ms);
    }

    #[test]
    /// What: Invalid values never clobber working settings.
    ///
    /// - Input: Zero page size, non-numeric debounce, empty url
    /// - Output: All defaults retained
    fn conf_str_rejects_invalid_values() {
        let mut cfg = ApiConfig::default();
        cfg.apply_conf_str("page_size = 0\ndebounce_ms = soon\napi_url =\n");
        assert_eq!(cfg, ApiConfig::default());
    }
}
