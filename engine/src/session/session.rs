use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::{Mutex, Notify};
use tokio::time::{Duration, sleep};

use crate::game::{GameState, Mark, Outcome, choose_move, winning_line};
use crate::log;
use super::broadcaster::{GameOverReport, GameSnapshot, SessionBroadcaster};
use super::session_rng::SessionRng;
use super::settings::SessionSettings;

/// Shared handles for one running session. Cloning shares the same game.
#[derive(Clone)]
pub struct SessionState {
    pub session_id: String,
    pub settings: SessionSettings,
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub turn_notify: Arc<Notify>,
    // Bumped on every reset. Deferred work (the bot's delayed move, the
    // restart countdown) captures the value up front and bails out if it
    // changed, so stale timers never touch a fresh game.
    pub generation: Arc<AtomicU64>,
    pub shutdown: Arc<AtomicBool>,
}

impl SessionState {
    pub fn create(session_id: &str, settings: SessionSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let game_state = new_game(&settings, &mut rng);

        Ok(Self {
            session_id: session_id.to_string(),
            settings,
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            turn_notify: Arc::new(Notify::new()),
            generation: Arc::new(AtomicU64::new(0)),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }
}

fn new_game(settings: &SessionSettings, rng: &mut SessionRng) -> GameState {
    match settings.resolve_bot_mark(rng) {
        Some(bot_mark) => GameState::human_vs_bot(bot_mark),
        None => GameState::human_vs_human(),
    }
}

pub struct Session;

impl Session {
    pub async fn run(state: SessionState, broadcaster: impl SessionBroadcaster) {
        loop {
            if state.shutdown.load(Ordering::SeqCst) {
                break;
            }

            let (snapshot, is_bot_turn) = {
                let game_state = state.game_state.lock().await;
                let is_bot_turn = game_state.is_bot_turn();
                (GameSnapshot::capture(&game_state, is_bot_turn), is_bot_turn)
            };

            broadcaster.broadcast_state(snapshot).await;

            if snapshot.outcome != Outcome::Undecided {
                let report = build_game_over_report(&state).await;
                broadcaster.broadcast_game_over(report).await;

                if !state.settings.auto_restart {
                    break;
                }
                if run_restart_countdown(&state, &broadcaster).await {
                    reset_game(&state).await;
                }
                continue;
            }

            if is_bot_turn {
                play_bot_turn(&state).await;
            } else {
                state.turn_notify.notified().await;
            }
        }
    }

    /// Inbound move from the presentation layer. Rejections are logged and
    /// dropped; the game is untouched.
    pub async fn handle_place(state: &SessionState, mark: Mark, index: usize) {
        let mut game_state = state.game_state.lock().await;
        match game_state.place_mark(mark, index) {
            Ok(()) => {
                drop(game_state);
                state.turn_notify.notify_one();
            }
            Err(e) => {
                log!(
                    "[session:{}] rejected move by {} at {}: {}",
                    state.session_id,
                    mark,
                    index,
                    e
                );
            }
        }
    }

    pub async fn handle_reset(state: &SessionState) {
        reset_game(state).await;
        state.turn_notify.notify_one();
    }

    pub fn handle_shutdown(state: &SessionState) {
        state.shutdown.store(true, Ordering::SeqCst);
        state.turn_notify.notify_one();
    }
}

async fn reset_game(state: &SessionState) {
    state.generation.fetch_add(1, Ordering::SeqCst);

    let mut rng = state.rng.lock().await;
    let fresh = new_game(&state.settings, &mut rng);
    drop(rng);

    *state.game_state.lock().await = fresh;
    log!("[session:{}] board reset", state.session_id);
}

async fn play_bot_turn(state: &SessionState) {
    let generation = state.generation.load(Ordering::SeqCst);

    let (board, bot_mark, human_mark) = {
        let game_state = state.game_state.lock().await;
        let Some(bot_mark) = game_state.bot_mark() else {
            return;
        };
        let Some(human_mark) = bot_mark.opponent() else {
            return;
        };
        (*game_state.board(), bot_mark, human_mark)
    };

    // Thinking pause before the reply lands.
    sleep(Duration::from_millis(state.settings.bot_delay_ms)).await;

    if state.shutdown.load(Ordering::SeqCst)
        || state.generation.load(Ordering::SeqCst) != generation
    {
        log!(
            "[session:{}] discarding bot move scheduled before reset",
            state.session_id
        );
        return;
    }

    let result = tokio::task::spawn_blocking(move || choose_move(&board, bot_mark, human_mark)).await;

    let index = match result {
        Ok(Ok(index)) => index,
        Ok(Err(e)) => {
            log!("[session:{}] bot has no move: {}", state.session_id, e);
            return;
        }
        Err(e) => {
            log!("[session:{}] bot task failed: {}", state.session_id, e);
            return;
        }
    };

    if state.generation.load(Ordering::SeqCst) != generation {
        log!(
            "[session:{}] discarding bot move scheduled before reset",
            state.session_id
        );
        return;
    }

    let mut game_state = state.game_state.lock().await;
    match game_state.place_mark(bot_mark, index) {
        Ok(()) => {
            log!("[session:{}] bot plays {}", state.session_id, index);
        }
        Err(e) => {
            log!(
                "[session:{}] bot failed to place at {}: {}",
                state.session_id,
                index,
                e
            );
        }
    }
}

async fn build_game_over_report(state: &SessionState) -> GameOverReport {
    let game_state = state.game_state.lock().await;
    GameOverReport {
        outcome: game_state.outcome(),
        winning_line: winning_line(game_state.board()),
        bot_mark: game_state.bot_mark(),
    }
}

async fn run_restart_countdown(
    state: &SessionState,
    broadcaster: &impl SessionBroadcaster,
) -> bool {
    let generation = state.generation.load(Ordering::SeqCst);
    let mut seconds_left = state.settings.restart_delay_secs;

    while seconds_left > 0 {
        broadcaster.broadcast_countdown(seconds_left).await;
        sleep(Duration::from_secs(1)).await;

        if state.shutdown.load(Ordering::SeqCst)
            || state.generation.load(Ordering::SeqCst) != generation
        {
            return false;
        }
        seconds_left -= 1;
    }

    true
}
