use std::sync::Arc;

use sqlx::{Error, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Device;

#[derive(Clone)]
pub struct DeviceRepository {
    storage: Arc<Storage>,
}

impl DeviceRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl DeviceRepository {
    pub async fn find_all(&self) -> Result<Vec<Device>, Error> {
        let devices: Vec<Device> = sqlx::query_as("SELECT * FROM devices")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(devices)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM devices")
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Device>, Error> {
        let device: Option<Device> = sqlx::query_as("SELECT * FROM devices WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(device)
    }

    /// Insert the device, or update the row with the same id in place.
    pub async fn upsert(
        &self,
        item: &Device,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Device, Error> {
        let device: Device = sqlx::query_as(
            r#"
            INSERT INTO devices (id, name, group_id, device_type)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = excluded.name,
                group_id = excluded.group_id,
                device_type = excluded.device_type
            RETURNING *
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.group_id)
        .bind(item.device_type)
        .fetch_one(&mut **transaction)
        .await?;

        Ok(device)
    }

    pub async fn save_all(
        &self,
        items: &[Device],
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        for item in items {
            self.upsert(item, transaction).await?;
        }

        Ok(())
    }

    /// Swap the whole catalog for `items` within one transaction, so a
    /// failure before commit leaves the previous catalog in place.
    pub async fn replace_all(
        &self,
        items: &[Device],
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query("DELETE FROM devices")
            .execute(&mut **transaction)
            .await?;

        self.save_all(items, transaction).await?;

        Ok(())
    }

    pub async fn delete(
        &self,
        id: &str,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query("DELETE FROM devices WHERE id = $1")
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(())
    }
}
