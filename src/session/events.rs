use crate::note::ActiveNote;
use crate::pitch_map::{Direction, KeyId};

/// A frequency reported by the pitch detector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PitchSample {
    /// Detected fundamental frequency in Hz.
    pub frequency: f32,
    /// Detection time in seconds, on a monotonic clock.
    pub timestamp: f64,
}

impl PitchSample {
    pub fn new(frequency: f32, timestamp: f64) -> Self {
        PitchSample {
            frequency,
            timestamp,
        }
    }
}

/// A seek request from transport controls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationCommand {
    /// Playback position in seconds. Only used to place an unset cursor.
    pub current_time: f64,
    pub direction: Direction,
    /// Time of the request in seconds, on the same clock as pitch samples.
    /// Becomes the start time of the synthesized note.
    pub timestamp: f64,
}

impl NavigationCommand {
    pub fn new(current_time: f64, direction: Direction, timestamp: f64) -> Self {
        NavigationCommand {
            current_time,
            direction,
            timestamp,
        }
    }
}

/// Passed to the session's handler whenever the active note is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNoteChange {
    pub key_id: KeyId,
    pub frequency: f32,
    pub start_time: f64,
}

impl From<&ActiveNote> for ActiveNoteChange {
    fn from(note: &ActiveNote) -> Self {
        ActiveNoteChange {
            key_id: note.key_id().clone(),
            frequency: note.current_frequency(),
            start_time: note.start_time(),
        }
    }
}

/// What happened to a pushed pitch sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Unusable frequency or timestamp, dropped.
    Invalid,
    /// Octave jump artifact, dropped.
    RejectedHarmonic,
    /// Same key as the active note, which was refreshed.
    Updated,
    /// Same key as the active note, which is protected and was left alone.
    UpdateSkipped,
    /// A new note replaced the active note.
    Onset,
}
