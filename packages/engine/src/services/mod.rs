//! Session orchestration above the pure domain.

pub mod events;
pub mod session;

pub use events::SessionEvent;
pub use session::{MatchSession, SessionConfig, COMPUTER, HUMAN};
