//! Game sessions and the service that drives them

mod board;
mod reaper;
mod service;
mod session;
mod store;
mod view;

pub use board::{Board, Row, Tile};
pub use reaper::SessionReaper;
pub use service::GameService;
pub use session::{GameSession, GameState, OwnerId, SessionId, SubmitOutcome};
pub use store::SessionStore;
pub use view::{SessionView, StartResponse, SubmitResponse};
