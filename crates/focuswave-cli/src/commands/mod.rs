pub mod analyze;
pub mod config;
pub mod session;
pub mod stats;
pub mod user;

use focuswave_core::{Config, FocusService, JsonStore, NullTone, ToneCue};

/// Tone cue that announces itself on stderr.
///
/// The CLI has no audio output; the announcement stands in for the tone so
/// scripted use can still observe the cue firing.
struct StderrTone;

impl ToneCue for StderrTone {
    fn play_tone(&mut self, frequency_hz: u32) {
        eprintln!("alpha cue: {frequency_hz} Hz tone on");
    }

    fn stop_tone(&mut self) {
        eprintln!("alpha cue: tone off");
    }
}

/// Open the service over the default store, honoring config.
pub fn open_service() -> Result<FocusService<JsonStore>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tone: Box<dyn ToneCue> = if config.tone.enabled {
        Box::new(StderrTone)
    } else {
        Box::new(NullTone)
    };
    Ok(FocusService::new(JsonStore::open()?)
        .with_tone(tone)
        .with_recent_limit(config.sessions.recent_limit))
}
