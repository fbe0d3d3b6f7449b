//! Game logic: word selection and the session state machine

mod session;
mod source;

pub use session::{EMPTY_INPUT_MESSAGE, GameSession};
pub use source::WordSource;
