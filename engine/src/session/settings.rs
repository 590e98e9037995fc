use serde::{Deserialize, Serialize};

use super::session_rng::SessionRng;
use crate::game::{GameMode, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Bot,
    Random,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub mode: GameMode,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
    pub restart_delay_secs: u64,
    pub auto_restart: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsBot,
            first_player: FirstPlayerMode::Human,
            bot_delay_ms: 500,
            restart_delay_secs: 5,
            auto_restart: true,
        }
    }
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.mode == GameMode::HumanVsHuman && self.first_player == FirstPlayerMode::Bot {
            return Err("first player cannot be the bot in a human vs human game".to_string());
        }
        if self.bot_delay_ms > 10_000 {
            return Err("bot delay must not exceed 10000 ms".to_string());
        }
        if self.restart_delay_secs > 60 {
            return Err("restart delay must not exceed 60 seconds".to_string());
        }
        Ok(())
    }

    /// The first mover always plays X. Returns which mark the bot holds, or
    /// None in a game without a bot.
    pub fn resolve_bot_mark(&self, rng: &mut SessionRng) -> Option<Mark> {
        match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsBot => {
                let bot_first = match self.first_player {
                    FirstPlayerMode::Human => false,
                    FirstPlayerMode::Bot => true,
                    FirstPlayerMode::Random => rng.random_bool(),
                };
                Some(if bot_first { Mark::X } else { Mark::O })
            }
        }
    }
}
