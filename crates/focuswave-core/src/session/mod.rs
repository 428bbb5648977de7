mod efficiency;
mod engine;
mod record;

pub use efficiency::score_efficiency;
pub use engine::FocusSession;
pub use record::{SessionRecord, SessionState, DEFAULT_ALPHA_FREQUENCY_HZ};
