mod manager;
mod serializer;
mod source;
mod validate;

pub use manager::ConfigManager;
pub use serializer::{ConfigSerializer, YamlConfigSerializer};
pub use source::{ConfigSource, FileConfigSource};
pub use validate::Validate;
