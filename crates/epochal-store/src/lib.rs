pub mod error;
pub mod schema;
pub mod setting;
pub mod store;

pub use error::{Result, StoreError};
pub use setting::{SettingName, SettingType};
pub use store::{SETTINGS_DB, Setting, Store, default_base_dir};
