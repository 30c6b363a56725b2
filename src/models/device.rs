use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    #[sqlx(rename = "LIGHT_SWITCH")]
    LightSwitch,
    #[sqlx(rename = "DIMMER")]
    Dimmer,
    #[sqlx(rename = "ROLLER_SHUTTER")]
    RollerShutter,
    #[sqlx(rename = "HEATING")]
    Heating,
}

/// A controllable smart-home unit, mirrored from the remote controller.
///
/// Serves both as the SQLite row and as the wire shape of the remote
/// device list (`type` / `groupId` JSON keys).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(rename = "groupId", default)]
    pub group_id: Option<i64>,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

// Identity follows the externally assigned id alone.
impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone)]
pub struct DeviceTable;

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        "devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                id VARCHAR(255) PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                group_id INTEGER,
                device_type VARCHAR(32) NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devices;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["device_groups"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_id_only() {
        let left = Device {
            id: "dimmer_1".into(),
            name: "Dimmer 1".into(),
            group_id: Some(1),
            device_type: DeviceType::Dimmer,
        };
        let right = Device {
            id: "dimmer_1".into(),
            name: "Renamed".into(),
            group_id: None,
            device_type: DeviceType::LightSwitch,
        };

        assert_eq!(left, right);
    }

    #[test]
    fn test_wire_shape() {
        let device: Device = serde_json::from_str(
            r#"{"id": "shutter_1", "name": "Roller shutter 1", "type": "ROLLER_SHUTTER"}"#,
        )
        .unwrap();

        assert_eq!(device.device_type, DeviceType::RollerShutter);
        assert_eq!(device.group_id, None);
    }
}
