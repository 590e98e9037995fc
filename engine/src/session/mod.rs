mod broadcaster;
mod session;
mod session_rng;
mod settings;

pub use broadcaster::{GameOverReport, GameSnapshot, SessionBroadcaster};
pub use session::{Session, SessionState};
pub use session_rng::SessionRng;
pub use settings::{FirstPlayerMode, SessionSettings};
