/// Detection counters for one session. Reset when the session starts or is reset.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionStats {
    /// Octave jumps rejected as detector artifacts.
    pub harmonics_rejected: u64,
    /// Pitch samples pushed to the session, including invalid ones.
    pub samples_received: u64,
    /// Samples dropped for having an unusable frequency or timestamp.
    pub invalid_samples: u64,
    /// Live detections that replaced the active note.
    pub onsets: u64,
    /// Live detections that refreshed the active note.
    pub updates_applied: u64,
    /// Live detections ignored because the active note is protected.
    pub updates_skipped: u64,
    /// Navigation requests handled.
    pub navigations: u64,
}

impl DetectionStats {
    pub fn new() -> Self {
        DetectionStats::default()
    }

    pub fn reset(&mut self) {
        *self = DetectionStats::default();
    }
}
