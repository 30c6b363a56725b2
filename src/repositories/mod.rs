mod device;
mod device_group;

pub use device::DeviceRepository;
pub use device_group::GroupRepository;

#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use crate::configs::schema::SchemaManager;
    use crate::configs::settings::Database;
    use crate::configs::storage::Storage;
    use crate::models::{Device, DeviceGroup};

    pub async fn setup_test_db() -> Arc<Storage> {
        Arc::new(
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
        )
    }

    pub async fn create_test_group(storage: Arc<Storage>, name: &str) -> DeviceGroup {
        sqlx::query_as::<_, DeviceGroup>(
            "INSERT INTO device_groups (name) VALUES ($1) RETURNING *;",
        )
        .bind(name)
        .fetch_one(storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn create_test_device(
        storage: Arc<Storage>,
        id: &str,
        group_id: Option<i64>,
    ) -> Device {
        sqlx::query_as::<_, Device>(
            r#"
            INSERT INTO devices (id, name, group_id, device_type)
                VALUES ($1, $2, $3, 'DIMMER')
                RETURNING *;
            "#,
        )
        .bind(id)
        .bind(format!("Device {id}"))
        .bind(group_id)
        .fetch_one(storage.get_pool())
        .await
        .unwrap()
    }
}
