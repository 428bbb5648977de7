//! # FocusWave Core Library
//!
//! Core business logic for FocusWave: a personalized focus-capacity
//! profiler and focus-session supervisor. The CLI binary is a thin layer
//! over this library.
//!
//! ## Architecture
//!
//! - **Profile engine**: pure, deterministic mapping from lifestyle inputs
//!   to a focus profile and an ordered recommendation list
//! - **Session engine**: a state machine over one session's lifecycle that
//!   counts concentration lapses and finalizes an efficiency score; callers
//!   drive the elapsed display via `advance()`
//! - **Storage**: JSON-file record store and TOML-based configuration
//! - **Tone cue**: trait seam for the alpha-wave refocusing tone
//!
//! ## Key Components
//!
//! - [`calculate_profile`]: lifestyle inputs -> [`FocusProfile`]
//! - [`FocusSession`]: session lifecycle state machine
//! - [`FocusService`]: store-backed orchestration of the full flow
//! - [`JsonStore`]: user and session persistence

pub mod audio;
pub mod error;
pub mod events;
pub mod profile;
pub mod recommend;
pub mod service;
pub mod session;
pub mod stats;
pub mod storage;

pub use audio::{NullTone, ToneCue};
pub use error::{CoreError, RecordKind, Result, StoreError, ValidationError};
pub use events::Event;
pub use profile::{
    calculate_profile, CaffeineIntake, ExerciseFrequency, FocusProfile, LifestyleInput, WorkType,
};
pub use recommend::{generate_recommendations, Category, Priority, Recommendation};
pub use service::{AnalysisOutcome, FocusService};
pub use session::{score_efficiency, FocusSession, SessionRecord, SessionState};
pub use stats::{aggregate, SessionStats};
pub use storage::{Config, JsonStore, RecordStore, UserRecord};
