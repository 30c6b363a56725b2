use serde::{Deserialize, Serialize};

use super::Table;

/// A named collection of devices, e.g. a room.
///
/// Devices reference the group; the group does not own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeviceGroup {
    pub id: i64,
    pub name: String,
}

#[derive(Clone)]
pub struct DeviceGroupTable;

impl Table for DeviceGroupTable {
    fn name(&self) -> &'static str {
        "device_groups"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS device_groups (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(255) NOT NULL UNIQUE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS device_groups;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
