mod clock;
mod error;
mod projector;
mod scheduler;
mod session;

pub use clock::PlaybackClock;
pub use error::LoadError;
pub use projector::project;
pub use scheduler::{NOTE_TRAVEL_TIME, NoteScheduler, RETIRE_MARGIN};
pub use session::PlaybackSession;
