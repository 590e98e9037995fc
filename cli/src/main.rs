mod config;
mod input;
mod render;

use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use tictactoe_engine::game::GameMode;
use tictactoe_engine::log;
use tictactoe_engine::logger::init_logger;
use tictactoe_engine::session::{FirstPlayerMode, Session, SessionState};

use input::InputCommand;
use render::TerminalBroadcaster;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Humans,
    Bot,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Bot,
    Random,
}

#[derive(Parser)]
#[command(
    name = "tictactoe",
    about = "Terminal tic-tac-toe with an optimal computer opponent"
)]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Opponent: another human or the computer
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Who makes the first move
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Thinking pause before the computer moves, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Seed for the random first-player choice
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(Some("tictactoe".to_string()));

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let manager = config::get_config_manager(&config_path);
    let mut cfg = match manager.get_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            log!("Failed to load config from {}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    if let Some(mode) = args.mode {
        cfg.mode = match mode {
            ModeArg::Humans => GameMode::HumanVsHuman,
            ModeArg::Bot => GameMode::HumanVsBot,
        };
    }
    if let Some(first) = args.first {
        cfg.first_player = match first {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Bot => FirstPlayerMode::Bot,
            FirstArg::Random => FirstPlayerMode::Random,
        };
    }
    if let Some(delay) = args.bot_delay_ms {
        cfg.bot_delay_ms = delay;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let state = match SessionState::create("local", cfg.to_settings(), seed) {
        Ok(state) => state,
        Err(e) => {
            log!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    print_help();

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_commands(command_tx));

    let broadcaster = TerminalBroadcaster::new();
    let mut game_handle = tokio::spawn(Session::run(state.clone(), broadcaster));

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Err(e) = result {
                    log!("Session task failed: {}", e);
                }
                break;
            }
            Some(command) = command_rx.recv() => match command {
                InputCommand::Place(index) => {
                    // In a bot game the human always submits their own mark;
                    // at a shared terminal whoever's turn it is owns the keys.
                    let mark = {
                        let game_state = state.game_state.lock().await;
                        game_state
                            .human_mark()
                            .unwrap_or_else(|| game_state.current_mark())
                    };
                    Session::handle_place(&state, mark, index).await;
                }
                InputCommand::Reset => Session::handle_reset(&state).await,
                InputCommand::Quit => Session::handle_shutdown(&state),
            },
        }
    }
}

async fn read_commands(tx: mpsc::UnboundedSender<InputCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match input::parse_command(&line) {
            Some(command) => {
                if tx.send(command).is_err() {
                    break;
                }
            }
            None => println!("Unrecognized command: {}", line.trim()),
        }
    }
}

fn print_help() {
    println!("Enter 1-9 to mark a cell (left to right, top to bottom).");
    println!("r resets the board, q quits.");
}
