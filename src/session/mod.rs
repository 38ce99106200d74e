//! A performance session: one pitch map, one cursor, one harmonic jump filter
//! and at most one active note.
//!
//! The session is driven by three kinds of caller events, all handled
//! synchronously:
//! * pitch samples from an external detector, see [`Session::push_sample`],
//! * seek requests from transport controls, see [`Session::navigate`],
//! * resets, see [`Session::reset`].
//!
//! Whenever the active note is replaced, the session invokes the provided
//! handler with an [`ActiveNoteChange`], which is what a keyboard view needs
//! to move its highlight.

mod config;
mod events;
mod state;
mod stats;

pub use config::SessionConfig;
pub use events::{ActiveNoteChange, NavigationCommand, PitchSample, SampleOutcome};
pub use state::Session;
pub use stats::DetectionStats;
