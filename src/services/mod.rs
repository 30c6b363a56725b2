pub mod controller_client;
pub mod device_service;

pub use controller_client::ControllerClient;
pub use device_service::{CommandOutcome, DeviceService, RemoteOutcome, SyncOutcome};
