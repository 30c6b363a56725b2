mod device;
mod device_group;
mod device_state;

pub use device::{Device, DeviceTable, DeviceType};
pub use device_group::{DeviceGroup, DeviceGroupTable};
pub use device_state::{DevicePowerState, DeviceState};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
