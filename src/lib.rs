use std::sync::Arc;

use crate::configs::settings::Settings;
use crate::services::SyncOutcome;

pub mod app;
pub mod configs;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;

pub async fn run(settings: &Arc<Settings>) -> anyhow::Result<()> {
    let service = app::create_service(settings).await?;

    service.populate_defaults().await?;

    match service.sync_device_list().await? {
        SyncOutcome::Completed { devices } => {
            tracing::info!("initial sync complete, mirroring {devices} devices");
        }
        SyncOutcome::RemoteUnavailable => {
            tracing::warn!(
                "controller unreachable, serving {} locally stored devices",
                service.count_devices().await?
            );
        }
    }

    Ok(())
}
