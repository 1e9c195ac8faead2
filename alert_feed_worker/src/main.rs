mod config;

use alert_feed::{
    domain::services::AlertFeed,
    inbound::polling_refresher::PollingRefresherHandle,
    outbound::{http::HttpAlertLedger, session::StaticUser},
};
use alert_service_client::AlertServiceClient;
use anyhow::Context;
use config::{Config, Environment};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let environment = Environment::new_or_prod();
    init_tracing(environment);

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::info!(
        environment = %config.environment,
        user = %config.admin_user_id,
        "starting alert feed worker"
    );

    let client = AlertServiceClient::new(
        config.internal_api_secret_key.clone(),
        config.notification_service_url.clone(),
    );
    let feed = Arc::new(AlertFeed::new_with_system_clock(
        HttpAlertLedger::new(client),
        StaticUser(config.admin_user_id.clone()),
    ));

    // populate as soon as the user is known; the refresher only fires after
    // its first interval
    feed.refresh().await;
    tracing::info!(unread = feed.unread_count(), "initial feed loaded");

    let refresher = PollingRefresherHandle::new_worker(feed.clone(), config.poll_interval);
    let mut stats_rx = refresher.stats().clone();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = stats_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let stats = *stats_rx.borrow_and_update();
                tracing::info!(
                    polls = stats.poll_count,
                    applied = stats.applied,
                    failed = stats.failed,
                    unread = stats.unread,
                    "alert feed refreshed"
                );
            }
        }
    }

    tracing::info!("alert feed worker stopping");
    Ok(())
}

fn init_tracing(environment: Environment) {
    match environment {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
