//! Console play: reading moves and driving the game loop.

mod input;
mod session;

pub use input::{ConsoleInput, InputError, MoveSource};
pub use session::{GameError, Session};
