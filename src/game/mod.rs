//! Game session: mutable state and the input state machine

mod machine;
mod session;

pub use machine::{Game, InputEvent, Response};
pub use session::{Message, MessageStyle, SessionState};
