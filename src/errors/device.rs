/// Store-side failures. Typed and propagated to the caller, unlike
/// remote faults which the service converts into tagged outcomes.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device not found")]
    DeviceNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
