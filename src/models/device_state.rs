use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevicePowerState {
    On,
    Off,
}

/// Live status of a device as reported by the remote controller.
///
/// Never persisted. Device types expose disjoint capability sets, so
/// every field besides the id is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    pub device_id: String,
    #[serde(default)]
    pub power_state: Option<DevicePowerState>,
    #[serde(default)]
    pub percentage: Option<u8>,
    #[serde(default)]
    pub target_temperature: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heating_state_with_only_target_temperature() {
        let state: DeviceState =
            serde_json::from_str(r#"{"deviceId": "heating_1", "targetTemperature": 21.5}"#)
                .unwrap();

        assert_eq!(state.device_id, "heating_1");
        assert_eq!(state.power_state, None);
        assert_eq!(state.percentage, None);
        assert_eq!(state.target_temperature, Some(21.5));
    }

    #[test]
    fn test_power_state_wire_form() {
        assert_eq!(
            serde_json::to_string(&DevicePowerState::On).unwrap(),
            r#""ON""#
        );
        assert_eq!(
            serde_json::from_str::<DevicePowerState>(r#""OFF""#).unwrap(),
            DevicePowerState::Off
        );
    }
}
