use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{ConfigSerializer, ConfigSource, FileConfigSource, Validate, YamlConfigSerializer};

/// Loads a validated config from a source, caching the first successful read.
/// A missing source yields the default config.
pub struct ConfigManager<TSource, TConfig, TSerializer = YamlConfigSerializer>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    source: TSource,
    serializer: TSerializer,
    cached: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileConfigSource, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileConfigSource::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TSource, TConfig, TSerializer> ConfigManager<TSource, TConfig, TSerializer>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(source: TSource, serializer: TSerializer) -> Self {
        Self {
            source,
            serializer,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.source.write(&content)?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}
