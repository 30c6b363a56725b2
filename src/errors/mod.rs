pub mod client;
pub mod device;

pub use client::ClientError;
pub use device::DeviceError;
