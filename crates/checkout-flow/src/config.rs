//! Client-side checkout settings.

use std::time::Duration;

use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings the checkout flow reads at payment-page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    api_base: Url,
    publishable_key: Option<String>,
    scheduling_url: Option<Url>,
    request_timeout: Duration,
}

impl CheckoutConfig {
    /// Settings for the API served at `api_base`, with no publishable key and
    /// no external scheduling link.
    #[must_use]
    pub const fn new(api_base: Url) -> Self {
        Self {
            api_base,
            publishable_key: None,
            scheduling_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the provider's publishable key.
    #[must_use]
    pub fn with_publishable_key(mut self, key: impl Into<String>) -> Self {
        self.publishable_key = Some(key.into());
        self
    }

    /// Set the external scheduling page used by hand-off.
    #[must_use]
    pub fn with_scheduling_url(mut self, url: Url) -> Self {
        self.scheduling_url = Some(url);
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Base URL of the booking API.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Publishable key, ignoring blank values.
    #[must_use]
    pub fn publishable_key(&self) -> Option<&str> {
        self.publishable_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// External scheduling page, if one is configured.
    #[must_use]
    pub const fn scheduling_url(&self) -> Option<&Url> {
        self.scheduling_url.as_ref()
    }

    /// Per-request timeout for API calls.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse("http://localhost:5000").expect("url")
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some("pk_test_1"), Some("pk_test_1"))]
    fn blank_keys_count_as_missing(#[case] key: Option<&str>, #[case] expected: Option<&str>) {
        let config = match key {
            Some(value) => CheckoutConfig::new(base()).with_publishable_key(value),
            None => CheckoutConfig::new(base()),
        };
        assert_eq!(config.publishable_key(), expected);
    }

    #[test]
    fn defaults_are_conservative() {
        let config = CheckoutConfig::new(base());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.scheduling_url().is_none());
        assert_eq!(config.api_base().as_str(), "http://localhost:5000/");
    }
}
