use std::sync::Arc;

use sqlx::{Error, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::DeviceGroup;

#[derive(Clone)]
pub struct GroupRepository {
    storage: Arc<Storage>,
}

impl GroupRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl GroupRepository {
    pub async fn find_all(&self) -> Result<Vec<DeviceGroup>, Error> {
        let groups: Vec<DeviceGroup> = sqlx::query_as("SELECT * FROM device_groups")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(groups)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM device_groups")
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DeviceGroup>, Error> {
        let group: Option<DeviceGroup> =
            sqlx::query_as("SELECT * FROM device_groups WHERE id = $1")
                .bind(id)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(group)
    }

    pub async fn create(
        &self,
        name: &str,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, Error> {
        let id = sqlx::query("INSERT INTO device_groups (name) VALUES ($1)")
            .bind(name)
            .execute(&mut **transaction)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn save_all(
        &self,
        names: &[&str],
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        for name in names {
            self.create(name, transaction).await?;
        }

        Ok(())
    }

    pub async fn delete(
        &self,
        id: i64,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), Error> {
        sqlx::query("DELETE FROM device_groups WHERE id = $1")
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(())
    }
}
