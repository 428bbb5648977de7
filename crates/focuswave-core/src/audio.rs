//! Alpha tone cue seam.
//!
//! The core never synthesizes audio; it only asks a collaborator to start
//! or stop a tone at a given frequency. Both calls are fire-and-forget and
//! idempotent: starting over an already-playing tone retunes it, stopping
//! a silent cue is a no-op.

/// Side-effect collaborator that plays the refocusing tone.
pub trait ToneCue {
    /// Start (or retune) the tone at `frequency_hz`.
    fn play_tone(&mut self, frequency_hz: u32);

    /// Stop the tone if one is playing.
    fn stop_tone(&mut self);
}

/// No-op cue for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTone;

impl ToneCue for NullTone {
    fn play_tone(&mut self, _frequency_hz: u32) {}

    fn stop_tone(&mut self) {}
}
