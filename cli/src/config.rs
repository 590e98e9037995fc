use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileConfigSource, Validate, YamlConfigSerializer};
use tictactoe_engine::game::GameMode;
use tictactoe_engine::session::{FirstPlayerMode, SessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileConfigSource, CliConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub mode: GameMode,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
    pub restart_delay_secs: u64,
    pub auto_restart: bool,
}

impl CliConfig {
    pub fn to_settings(&self) -> SessionSettings {
        SessionSettings {
            mode: self.mode,
            first_player: self.first_player,
            bot_delay_ms: self.bot_delay_ms,
            restart_delay_secs: self.restart_delay_secs,
            auto_restart: self.auto_restart,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().validate()
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        let settings = SessionSettings::default();
        Self {
            mode: settings.mode,
            first_player: settings.first_player,
            bot_delay_ms: settings.bot_delay_ms,
            restart_delay_secs: settings.restart_delay_secs,
            auto_restart: settings.auto_restart,
        }
    }
}
