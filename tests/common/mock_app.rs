use std::sync::Arc;

use wiremock::MockServer;

use smarthome_backend::configs::schema::SchemaManager;
use smarthome_backend::configs::settings::Database;
use smarthome_backend::configs::storage::Storage;
use smarthome_backend::models::{Device, DeviceGroup, DeviceType};
use smarthome_backend::services::controller_client::ControllerClient;
use smarthome_backend::services::device_service::DeviceService;

/// In-memory backend with a wiremock server standing in for the remote
/// controller.
pub struct MockApp {
    pub storage: Arc<Storage>,
    pub service: DeviceService,
    pub controller: MockServer,
}

impl MockApp {
    pub async fn new() -> Self {
        let controller = MockServer::start().await;

        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let client = ControllerClient::from_reqwest(&controller.uri(), reqwest::Client::new())
            .unwrap();

        Self {
            service: DeviceService::new(storage.clone(), client),
            storage,
            controller,
        }
    }

    pub async fn create_test_group(&self, name: &str) -> DeviceGroup {
        sqlx::query_as::<_, DeviceGroup>(
            "INSERT INTO device_groups (name) VALUES ($1) RETURNING *;",
        )
        .bind(name)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub fn device(id: &str, device_type: DeviceType) -> Device {
        Device {
            id: id.into(),
            name: id.replace('_', " "),
            group_id: None,
            device_type,
        }
    }
}
