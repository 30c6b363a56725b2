use std::sync::Arc;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::services::{ControllerClient, DeviceService};

/// Wire up the service graph the presentation layer consumes.
pub async fn create_service(settings: &Arc<Settings>) -> anyhow::Result<DeviceService> {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default()).await?,
    );

    let client = ControllerClient::new(&settings.controller)?;

    Ok(DeviceService::new(storage, client))
}
