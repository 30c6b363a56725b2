use std::future::Future;
use std::sync::Arc;

use crate::configs::Storage;
use crate::errors::{ClientError, DeviceError};
use crate::models::{Device, DeviceGroup, DevicePowerState, DeviceState, DeviceType};
use crate::repositories::{DeviceRepository, GroupRepository};
use crate::services::ControllerClient;

/// Result of a catalog sync against the remote controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The local catalog now mirrors the remote list.
    Completed { devices: usize },
    /// The remote call failed; the local catalog was left untouched.
    RemoteUnavailable,
}

/// A remote read that distinguishes "nothing there" from "fetch failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome<T> {
    Available(T),
    Unavailable,
}

impl<T> RemoteOutcome<T> {
    pub fn available(self) -> Option<T> {
        match self {
            RemoteOutcome::Available(value) => Some(value),
            RemoteOutcome::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, RemoteOutcome::Unavailable)
    }
}

/// Result of relaying a user command to the remote controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Dispatched,
    /// The device carries no id; no remote call was attempted.
    MissingDeviceId,
    RemoteUnavailable,
}

/// Single point of truth for the device catalog and for relaying user
/// commands to the remote controller.
///
/// Remote faults are logged and reported as tagged outcomes, never
/// raised; store faults propagate as [`DeviceError`].
pub struct DeviceService {
    devices: DeviceRepository,
    groups: GroupRepository,
    client: ControllerClient,
    storage: Arc<Storage>,
}

impl DeviceService {
    pub fn new(storage: Arc<Storage>, client: ControllerClient) -> Self {
        Self {
            devices: DeviceRepository::new(storage.clone()),
            groups: GroupRepository::new(storage.clone()),
            client,
            storage,
        }
    }

    pub async fn list_devices(&self) -> Result<Vec<Device>, DeviceError> {
        Ok(self.devices.find_all().await?)
    }

    pub async fn count_devices(&self) -> Result<i64, DeviceError> {
        Ok(self.devices.count().await?)
    }

    pub async fn get_device(&self, id: &str) -> Result<Device, DeviceError> {
        self.devices
            .find_by_id(id)
            .await?
            .ok_or(DeviceError::DeviceNotFound)
    }

    /// Upsert one device and return the persisted form.
    pub async fn save_device(&self, device: &Device) -> Result<Device, DeviceError> {
        let mut tx = self.storage.get_pool().begin().await?;
        let saved = self.devices.upsert(device, &mut tx).await?;
        tx.commit().await?;

        Ok(saved)
    }

    /// Remove one device. Deleting an absent device is a no-op.
    pub async fn delete_device(&self, device: &Device) -> Result<(), DeviceError> {
        let mut tx = self.storage.get_pool().begin().await?;
        self.devices.delete(&device.id, &mut tx).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn list_groups(&self) -> Result<Vec<DeviceGroup>, DeviceError> {
        Ok(self.groups.find_all().await?)
    }

    pub async fn count_groups(&self) -> Result<i64, DeviceError> {
        Ok(self.groups.count().await?)
    }

    /// Resolve the device's group. A missing or dangling reference is
    /// treated as ungrouped.
    pub async fn find_group(&self, device: &Device) -> Result<Option<DeviceGroup>, DeviceError> {
        match device.group_id {
            Some(group_id) => Ok(self.groups.find_by_id(group_id).await?),
            None => Ok(None),
        }
    }

    /// Refresh the device catalog from the remote controller.
    ///
    /// The remote list is authoritative: on success the whole local
    /// catalog is replaced within one transaction. On remote failure the
    /// catalog stays as it was.
    pub async fn sync_device_list(&self) -> Result<SyncOutcome, DeviceError> {
        let devices = match self.client.find_all_devices().await {
            Ok(devices) => devices,
            Err(e) => {
                Self::log_remote_failure("sync_device_list", &e);
                return Ok(SyncOutcome::RemoteUnavailable);
            }
        };

        let mut tx = self.storage.get_pool().begin().await?;
        self.devices.replace_all(&devices, &mut tx).await?;
        tx.commit().await?;

        tracing::info!("Refreshed {} devices from remote", devices.len());

        Ok(SyncOutcome::Completed {
            devices: devices.len(),
        })
    }

    /// Fetch live state for all devices from the remote controller.
    ///
    /// A reachable controller with zero states is `Available([])`; a
    /// failed fetch is `Unavailable`. Never raises.
    pub async fn list_device_states(&self) -> RemoteOutcome<Vec<DeviceState>> {
        match self.client.find_all_device_states().await {
            Ok(states) => {
                tracing::info!("Refreshed {} device states from remote", states.len());
                RemoteOutcome::Available(states)
            }
            Err(e) => {
                Self::log_remote_failure("list_device_states", &e);
                RemoteOutcome::Unavailable
            }
        }
    }

    pub async fn set_device_power_state(
        &self,
        device: &Device,
        power_state: DevicePowerState,
    ) -> CommandOutcome {
        let Some(device_id) = Self::device_id(device) else {
            return CommandOutcome::MissingDeviceId;
        };

        self.dispatch(
            "set_device_power_state",
            self.client.set_power_state(device_id, power_state),
        )
        .await
    }

    pub async fn set_device_percentage(&self, device: &Device, percentage: u8) -> CommandOutcome {
        let Some(device_id) = Self::device_id(device) else {
            return CommandOutcome::MissingDeviceId;
        };

        self.dispatch(
            "set_device_percentage",
            self.client.set_percentage(device_id, percentage),
        )
        .await
    }

    pub async fn set_device_target_temperature(
        &self,
        device: &Device,
        target_temperature: i32,
    ) -> CommandOutcome {
        let Some(device_id) = Self::device_id(device) else {
            return CommandOutcome::MissingDeviceId;
        };

        self.dispatch(
            "set_device_target_temperature",
            self.client
                .set_target_temperature(device_id, target_temperature),
        )
        .await
    }

    /// Seed the demo catalog the dashboard starts out with. Runs only
    /// against empty tables, so repeated boots change nothing.
    pub async fn populate_defaults(&self) -> Result<(), DeviceError> {
        if self.groups.count().await? == 0 {
            let mut tx = self.storage.get_pool().begin().await?;
            self.groups
                .save_all(&["Kitchen", "Living Room", "Bedroom"], &mut tx)
                .await?;
            tx.commit().await?;
        }

        if self.devices.count().await? == 0 {
            let catalog = [
                ("Switch 1", DeviceType::LightSwitch),
                ("Switch 2", DeviceType::LightSwitch),
                ("Switch 3", DeviceType::LightSwitch),
                ("Switch 4", DeviceType::LightSwitch),
                ("Dimmer 1", DeviceType::Dimmer),
                ("Dimmer 2", DeviceType::Dimmer),
                ("Dimmer 3", DeviceType::Dimmer),
                ("Dimmer 4", DeviceType::Dimmer),
                ("Dimmer 5", DeviceType::Dimmer),
                ("Roller shutter 1", DeviceType::RollerShutter),
                ("Roller shutter 2", DeviceType::RollerShutter),
                ("Heating 1", DeviceType::Heating),
            ];

            let groups = self.groups.find_all().await?;
            let devices: Vec<Device> = catalog
                .iter()
                .enumerate()
                .map(|(index, (name, device_type))| Device {
                    id: name.to_lowercase().replace(' ', "_"),
                    name: (*name).to_owned(),
                    group_id: (!groups.is_empty()).then(|| groups[index % groups.len()].id),
                    device_type: *device_type,
                })
                .collect();

            let mut tx = self.storage.get_pool().begin().await?;
            self.devices.save_all(&devices, &mut tx).await?;
            tx.commit().await?;

            tracing::info!("Seeded {} demo devices", devices.len());
        }

        Ok(())
    }

    fn device_id(device: &Device) -> Option<&str> {
        let id = device.id.trim();

        if id.is_empty() {
            tracing::error!("Device has no id: {}", device.name);
            None
        } else {
            Some(id)
        }
    }

    async fn dispatch(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<(), ClientError>>,
    ) -> CommandOutcome {
        match call.await {
            Ok(()) => CommandOutcome::Dispatched,
            Err(e) => {
                Self::log_remote_failure(operation, &e);
                CommandOutcome::RemoteUnavailable
            }
        }
    }

    fn log_remote_failure(operation: &str, error: &ClientError) {
        match error.status() {
            Some(status) => {
                tracing::error!(operation, "Request returned with HTTP {status}");
            }
            None => {
                tracing::error!(operation, "Request failed: {error}");
            }
        }
    }
}
