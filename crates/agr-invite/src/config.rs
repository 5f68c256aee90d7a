use std::path::Path;

use agr_observe::LogConfig;
use agr_portal::{ClientConfig, InviteGroupUsersOptions, InviteRole};
use anyhow::Context;
use serde::Deserialize;

/// Environment variable consulted when the config file carries no token.
pub const TOKEN_ENV: &str = "AGR_TOKEN";

/// Two weeks, in minutes.
const DEFAULT_EXPIRATION_MIN: u32 = 20_160;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteConfig {
    #[serde(default)]
    pub logger: LogConfig,
    #[serde(default)]
    pub client: ClientConfig,
    pub token: Option<String>,
    pub group: String,
    pub users: Vec<String>,
    #[serde(default)]
    pub role: InviteRole,
    #[serde(default = "default_expiration")]
    pub expiration: u32,
    /// Print Prometheus text exposition after the run.
    #[serde(default)]
    pub print_metrics: bool,
}

fn default_expiration() -> u32 {
    DEFAULT_EXPIRATION_MIN
}

impl InviteConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut cfg: InviteConfig = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        if cfg.token.is_none() {
            cfg.token = std::env::var(TOKEN_ENV).ok();
        }
        Ok(cfg)
    }

    pub fn invite_options(&self) -> InviteGroupUsersOptions {
        InviteGroupUsersOptions {
            id: self.group.clone(),
            users: self.users.clone(),
            role: self.role,
            expiration: self.expiration,
            request: self.client.request_options(self.token.as_deref()),
        }
    }
}
