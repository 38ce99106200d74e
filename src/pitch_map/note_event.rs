use alloc::string::String;
use core::fmt;

/// Identifies a keyboard key, for example `C4` or `F#3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(String);

impl KeyId {
    pub fn new<S: Into<String>>(name: S) -> Self {
        KeyId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyId {
    fn from(name: &str) -> Self {
        KeyId::new(name)
    }
}

/// An expected note in a [`PitchMap`](super::PitchMap).
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    /// Onset time in seconds from the start of the piece.
    pub time: f64,
    /// The key to highlight.
    pub key_id: KeyId,
    /// The expected fundamental frequency in Hz.
    pub frequency: f32,
}

impl NoteEvent {
    pub fn new(time: f64, key_id: KeyId, frequency: f32) -> Self {
        NoteEvent {
            time,
            key_id,
            frequency,
        }
    }
}
