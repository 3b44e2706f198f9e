pub mod state;
pub mod store;
pub mod controller;

pub use state::SessionState;
pub use store::{FinishedTranslation, SessionError, SessionSnapshot, SessionStore, TranslationTicket};
pub use controller::{clear, submit, SubmitError, SubmitOutcome, EMPTY_INPUT_WARNING};
