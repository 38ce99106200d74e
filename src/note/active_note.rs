use crate::pitch_map::{KeyId, NoteEvent};

/// Where an [`ActiveNote`] came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoteOrigin {
    /// Started by an accepted live detection.
    LiveDetected,
    /// Synthesized from a pitch map event, for example after a seek.
    MapSynthesized,
}

/// The result of [`ActiveNote::update`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Frequency and detection time were refreshed.
    Applied,
    /// The note is protected and was left untouched.
    Skipped,
}

/// The note currently considered sounding.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNote {
    key_id: KeyId,
    current_frequency: f32,
    /// Onset time in seconds, on the caller's monotonic clock.
    start_time: f64,
    /// Time of the most recent detection that refreshed the note.
    last_detection: f64,
    origin: NoteOrigin,
}

impl ActiveNote {
    /// Creates a note from a live detection at time `now`.
    pub fn live(key_id: KeyId, frequency: f32, now: f64) -> Self {
        ActiveNote {
            key_id,
            current_frequency: frequency,
            start_time: now,
            last_detection: now,
            origin: NoteOrigin::LiveDetected,
        }
    }

    /// Creates a protected note from a pitch map event at time `now`. The
    /// last detection time is pinned to the start time, so the measured
    /// duration stays zero for as long as the note lives.
    pub fn from_map(event: &NoteEvent, now: f64) -> Self {
        ActiveNote {
            key_id: event.key_id.clone(),
            current_frequency: event.frequency,
            start_time: now,
            last_detection: now,
            origin: NoteOrigin::MapSynthesized,
        }
    }

    /// Refreshes the note with a new detection of the same key. Does nothing
    /// for protected notes.
    pub fn update(&mut self, frequency: f32, now: f64) -> UpdateOutcome {
        if self.is_simulated()
            || self.from_pitch_map()
            || self.protected_from_cleanup()
            || self.protected_from_update()
        {
            log::debug!("Skipped update of protected note {}", self.key_id);
            return UpdateOutcome::Skipped;
        }
        self.current_frequency = frequency;
        self.last_detection = now;
        UpdateOutcome::Applied
    }

    pub fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    pub fn current_frequency(&self) -> f32 {
        self.current_frequency
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn last_detection(&self) -> f64 {
        self.last_detection
    }

    pub fn origin(&self) -> NoteOrigin {
        self.origin
    }

    /// Time in seconds between the onset and the most recent detection.
    pub fn measured_duration(&self) -> f64 {
        self.last_detection - self.start_time
    }

    pub fn is_simulated(&self) -> bool {
        self.origin == NoteOrigin::MapSynthesized
    }

    pub fn from_pitch_map(&self) -> bool {
        self.origin == NoteOrigin::MapSynthesized
    }

    pub fn protected_from_cleanup(&self) -> bool {
        self.origin == NoteOrigin::MapSynthesized
    }

    pub fn protected_from_update(&self) -> bool {
        self.origin == NoteOrigin::MapSynthesized
    }

    pub fn accepts_updates(&self) -> bool {
        !self.protected_from_update()
    }

    pub fn accepts_cleanup(&self) -> bool {
        !self.protected_from_cleanup()
    }
}
