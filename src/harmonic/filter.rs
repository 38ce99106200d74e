use crate::error::Result;
use crate::harmonic::{HarmonicFilterConfig, OctaveBand};
use crate::note::ActiveNote;
use crate::session::DetectionStats;

/// Classifies new frequency observations as genuine pitch changes or
/// octave errors of the pitch detector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarmonicJumpFilter {
    config: HarmonicFilterConfig,
}

impl HarmonicJumpFilter {
    /// Creates a filter with the default octave bands and a 40 ms threshold.
    pub fn new() -> Self {
        HarmonicJumpFilter {
            config: HarmonicFilterConfig::default(),
        }
    }

    pub fn from_config(config: HarmonicFilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(HarmonicJumpFilter { config })
    }

    pub fn config(&self) -> &HarmonicFilterConfig {
        &self.config
    }

    /// Returns the first octave band containing `ratio`, if any.
    pub fn octave_band(&self, ratio: f32) -> Option<&OctaveBand> {
        self.config.octave_bands.iter().find(|band| band.contains(ratio))
    }

    /// Indicates if a frequency ratio observed `note_duration_ms` into the
    /// current note should be treated as a detector artifact.
    pub fn is_artifact(&self, ratio: f32, note_duration_ms: f64) -> bool {
        self.octave_band(ratio).is_some()
            && note_duration_ms < self.config.max_artifact_duration_ms as f64
    }

    /// Returns true if `new_frequency`, observed at time `now` (seconds), is an
    /// octave jump away from `current_note` too early in the note's life to be
    /// taken seriously. Rejections are counted in `stats`.
    ///
    /// Never rejects anything if there is no current note.
    pub fn is_harmonic_jump(
        &self,
        new_frequency: f32,
        current_note: Option<&ActiveNote>,
        now: f64,
        stats: &mut DetectionStats,
    ) -> bool {
        let current_note = match current_note {
            Some(note) => note,
            None => return false,
        };

        let current_frequency = current_note.current_frequency();
        let ratio = new_frequency / current_frequency;
        let note_duration_ms = (now - current_note.start_time()) * 1000.0;

        if self.octave_band(ratio).is_none() {
            return false;
        }

        if self.is_artifact(ratio, note_duration_ms) {
            log::debug!(
                "Rejected octave jump {:.1} Hz -> {:.1} Hz after {:.0} ms (ratio {:.2})",
                current_frequency,
                new_frequency,
                note_duration_ms,
                ratio
            );
            stats.harmonics_rejected += 1;
            true
        } else {
            log::debug!(
                "Accepted octave jump {:.1} Hz -> {:.1} Hz after {:.0} ms (ratio {:.2})",
                current_frequency,
                new_frequency,
                note_duration_ms,
                ratio
            );
            false
        }
    }
}
