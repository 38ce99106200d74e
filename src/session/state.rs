use crate::common::{midi_note_to_key_id, nearest_midi_note};
use crate::error::Result;
use crate::harmonic::HarmonicJumpFilter;
use crate::note::{ActiveNote, UpdateOutcome};
use crate::pitch_map::{Navigator, NoteEvent, PitchMap};
use crate::session::{
    ActiveNoteChange, DetectionStats, NavigationCommand, PitchSample, SampleOutcome,
    SessionConfig,
};

/// Follows a live pitch detection stream against a pitch map.
pub struct Session {
    pitch_map: PitchMap,
    navigator: Navigator,
    filter: HarmonicJumpFilter,
    active_note: Option<ActiveNote>,
    stats: DetectionStats,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with the default configuration.
    pub fn new(pitch_map: PitchMap) -> Self {
        Session {
            pitch_map,
            navigator: Navigator::new(),
            filter: HarmonicJumpFilter::new(),
            active_note: None,
            stats: DetectionStats::new(),
            config: SessionConfig::default(),
        }
    }

    pub fn with_config(pitch_map: PitchMap, config: SessionConfig) -> Result<Self> {
        let filter = HarmonicJumpFilter::from_config(config.filter.clone())?;
        Ok(Session {
            pitch_map,
            navigator: Navigator::new(),
            filter,
            active_note: None,
            stats: DetectionStats::new(),
            config,
        })
    }

    /// Handles a pitch sample from the detector. Calls `handler` if the sample
    /// starts a new active note.
    pub fn push_sample<F>(&mut self, sample: PitchSample, mut handler: F) -> SampleOutcome
    where
        F: FnMut(&ActiveNoteChange),
    {
        self.stats.samples_received += 1;

        let PitchSample {
            frequency,
            timestamp,
        } = sample;
        let note_number = match nearest_midi_note(frequency) {
            Some(note_number) if timestamp.is_finite() => note_number,
            _ => {
                log::debug!("Dropped invalid sample {} Hz at {} s", frequency, timestamp);
                self.stats.invalid_samples += 1;
                return SampleOutcome::Invalid;
            }
        };

        if self.filter.is_harmonic_jump(
            frequency,
            self.active_note.as_ref(),
            timestamp,
            &mut self.stats,
        ) {
            return SampleOutcome::RejectedHarmonic;
        }

        // Same key is decided by pitch, map events may use any key naming
        if let Some(note) = self.active_note.as_mut() {
            if nearest_midi_note(note.current_frequency()) == Some(note_number) {
                return match note.update(frequency, timestamp) {
                    UpdateOutcome::Applied => {
                        self.stats.updates_applied += 1;
                        SampleOutcome::Updated
                    }
                    UpdateOutcome::Skipped => {
                        self.stats.updates_skipped += 1;
                        SampleOutcome::UpdateSkipped
                    }
                };
            }
        }

        let key_id = midi_note_to_key_id(note_number);
        log::debug!("Note onset {} at {:.1} Hz", key_id, frequency);
        let note = ActiveNote::live(key_id, frequency, timestamp);
        handler(&ActiveNoteChange::from(&note));
        self.active_note = Some(note);
        self.stats.onsets += 1;
        SampleOutcome::Onset
    }

    /// Moves the cursor one event in the requested direction and makes the
    /// event it lands on the active note. Returns `None`, leaving the active
    /// note alone, if the pitch map is empty.
    pub fn navigate<F>(&mut self, command: NavigationCommand, mut handler: F) -> Option<&NoteEvent>
    where
        F: FnMut(&ActiveNoteChange),
    {
        self.stats.navigations += 1;
        let event =
            self.navigator
                .navigate(&self.pitch_map, command.current_time, command.direction)?;

        let note = ActiveNote::from_map(event, command.timestamp);
        handler(&ActiveNoteChange::from(&note));
        self.active_note = Some(note);
        Some(event)
    }

    /// Unsets the cursor, discards the active note and clears the stats.
    pub fn reset(&mut self) {
        log::info!("Resetting session");
        self.navigator.reset();
        self.active_note = None;
        self.stats.reset();
    }

    /// Replaces the pitch map and resets the session.
    pub fn load_pitch_map(&mut self, pitch_map: PitchMap) {
        log::info!("Loaded pitch map with {} events", pitch_map.len());
        self.pitch_map = pitch_map;
        self.reset();
    }

    pub fn active_note(&self) -> Option<&ActiveNote> {
        self.active_note.as_ref()
    }

    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    pub fn pitch_map(&self) -> &PitchMap {
        &self.pitch_map
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
