pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod secret_storage;

pub use crate::config_service::{AppConfig, ConfigService};
pub use crate::secret_service::SecretServiceImpl;
pub use crate::secret_storage::SecretStorage;
