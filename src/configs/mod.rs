pub mod schema;
pub mod settings;
pub mod storage;

pub use schema::SchemaManager;
pub use settings::{Controller, Database, Settings};
pub use storage::Storage;
