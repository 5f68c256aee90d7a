use std::sync::Arc;

use anyhow::{Context, bail};
use prometheus::{Encoder, TextEncoder};
use tracing::info;

use agr_observe::{init_local_offset, init_logging};
use agr_portal::{connect, invite_group_users};
use agr_prometheus::PrometheusMetrics;

mod config;
use config::InviteConfig;

fn main() -> anyhow::Result<()> {
    // Local offset detection must happen before the runtime spawns threads.
    init_local_offset();

    let path = std::env::args()
        .nth(1)
        .context("usage: agr-invite <config.json>")?;
    let cfg = InviteConfig::load(&path)?;

    let log = cfg.logger.clone().with_env_override()?;
    init_logging(&log)?;
    info!(config = %path, "logger initialized");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cfg))
}

async fn run(cfg: InviteConfig) -> anyhow::Result<()> {
    let metrics = Arc::new(PrometheusMetrics::new()?);
    let client = connect(&cfg.client)?.with_metrics(metrics.clone());

    let options = cfg.invite_options();
    info!(group = %options.id, users = options.users.len(), batch_size = %client.batch_size(), "inviting users");

    let res = invite_group_users(&client, &options).await?;
    println!("{}", serde_json::to_string_pretty(&res)?);

    if cfg.print_metrics {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
        print!("{}", String::from_utf8_lossy(&buf));
    }

    if !res.is_success() {
        bail!("{} invitation request(s) failed", res.errors().len());
    }
    Ok(())
}
