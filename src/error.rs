//! Error types for pitch map construction and configuration

use thiserror::Error;

/// Errors reported when building a pitch map or a session.
///
/// Runtime operations (navigation, filtering, pushing samples) never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A note event time is negative or not finite
    #[error("Invalid time {time} s for note event {index}")]
    InvalidTime { index: usize, time: f64 },

    /// A note event frequency is not a positive finite number
    #[error("Invalid frequency {frequency} Hz for note event {index}")]
    InvalidFrequency { index: usize, frequency: f32 },

    /// Note event times are not in ascending order
    #[error("Note event {index} at {time} s comes before the previous event at {previous} s")]
    UnsortedTimes { index: usize, previous: f64, time: f64 },

    /// A frequency does not map to a MIDI note in 0..=127
    #[error("Frequency {frequency} Hz of note event {index} is outside the MIDI note range")]
    NoteOutOfRange { index: usize, frequency: f32 },

    /// Invalid filter or session configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result type for pitch map and session construction
pub type Result<T> = core::result::Result<T, Error>;
