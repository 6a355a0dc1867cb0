pub mod state;

pub use state::{dispatch, SessionState};
