use agr_model::{BatchSize, RequestOptions};
use serde::{Deserialize, Serialize};

use crate::PortalError;

/// Portal client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Sharing REST root; `None` means ArcGIS Online.
    pub portal: Option<String>,
    /// Items per request for batched endpoints.
    pub batch_size: BatchSize,
    /// Per-request timeout applied by the HTTP client.
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            portal: None,
            batch_size: BatchSize::default(),
            timeout_ms: 30_000,
            user_agent: concat!("agr-portal/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Check values serde cannot: a positive timeout, an http(s) portal root, a user agent.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.timeout_ms == 0 {
            return Err(PortalError::InvalidConfig("timeoutMs must be positive".into()));
        }
        if let Some(portal) = &self.portal {
            if !(portal.starts_with("https://") || portal.starts_with("http://")) {
                return Err(PortalError::InvalidConfig(format!(
                    "portal must be an http(s) URL, got {portal:?}"
                )));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err(PortalError::InvalidConfig("userAgent must not be empty".into()));
        }
        Ok(())
    }

    /// Base request options for this portal, carrying `token` if given.
    pub fn request_options(&self, token: Option<&str>) -> RequestOptions {
        RequestOptions {
            portal: self.portal.clone(),
            token: token.map(str::to_string),
            ..RequestOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = ClientConfig::default();
        assert!(cfg.portal.is_none());
        assert_eq!(cfg.batch_size.get(), 25);
        assert_eq!(cfg.timeout_ms, 30_000);
        assert!(cfg.user_agent.starts_with("agr-portal/"));
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: ClientConfig = serde_json::from_str(r#"{"batchSize": 10}"#).unwrap();
        assert_eq!(cfg.batch_size.get(), 10);
        assert_eq!(cfg.timeout_ms, 30_000);
    }

    #[test]
    fn serde_rejects_zero_batch_size() {
        assert!(serde_json::from_str::<ClientConfig>(r#"{"batchSize": 0}"#).is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero_timeout = ClientConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let bad_portal = ClientConfig {
            portal: Some("org.example.com/sharing/rest".into()),
            ..Default::default()
        };
        let no_agent = ClientConfig {
            user_agent: " ".into(),
            ..Default::default()
        };

        for cfg in [zero_timeout, bad_portal, no_agent] {
            assert!(matches!(cfg.validate(), Err(PortalError::InvalidConfig(_))));
        }
    }

    #[test]
    fn request_options_carry_portal_and_token() {
        let cfg = ClientConfig {
            portal: Some("https://org.example.com/sharing/rest".into()),
            ..Default::default()
        };
        let opts = cfg.request_options(Some("tok"));
        assert_eq!(opts.portal, cfg.portal);
        assert_eq!(opts.token.as_deref(), Some("tok"));
        assert!(opts.params.is_empty());
    }
}
