pub mod controller;
pub mod state;

pub use controller::{Controller, SessionSnapshot, SubmitOutcome};
pub use state::{AppState, Session};
