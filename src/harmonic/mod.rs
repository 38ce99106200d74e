//! Octave jump rejection.
//!
//! Pitch detectors tend to lock onto the second harmonic, or report half the
//! fundamental frequency, for a short while after a note starts. Seen from the
//! keyboard this looks like the player jumping an octave and back. The
//! [`HarmonicJumpFilter`] flags such jumps when they happen very early in the
//! life of the current note, and lets them through once the note has been
//! sounding long enough for a deliberate octave jump to be plausible.
//!
//! # Examples
//!
//! ```
//! use pitchnav::harmonic::HarmonicJumpFilter;
//! use pitchnav::note::ActiveNote;
//! use pitchnav::pitch_map::KeyId;
//! use pitchnav::session::DetectionStats;
//!
//! let filter = HarmonicJumpFilter::new();
//! let mut stats = DetectionStats::new();
//! let note = ActiveNote::live(KeyId::new("A4"), 440.0, 1.0);
//!
//! // An octave up 20 ms into the note is a detector artifact...
//! assert!(filter.is_harmonic_jump(880.0, Some(&note), 1.02, &mut stats));
//! // ...but not after half a second.
//! assert!(!filter.is_harmonic_jump(880.0, Some(&note), 1.5, &mut stats));
//! assert_eq!(stats.harmonics_rejected, 1);
//! ```

mod config;
mod filter;

pub use config::{HarmonicFilterConfig, OctaveBand, DEFAULT_MAX_ARTIFACT_DURATION_MS};
pub use filter::HarmonicJumpFilter;
