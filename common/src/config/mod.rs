mod config_content_provider;
mod config_manager;
mod config_serializer;
mod validate;

#[cfg(test)]
pub use config_content_provider::InMemoryConfigProvider;
pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
