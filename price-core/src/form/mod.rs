mod controller;
mod event;
mod state;

pub use controller::{ControllerSnapshot, FormController};
pub use event::FormEvent;
pub use state::FormState;
