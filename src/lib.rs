//! A pitch map navigator with octave jump rejection, for virtual keyboards that
//! visually follow a live [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29) detection stream.
//!
//! Pitch detectors frequently report a tone at twice or half its actual
//! fundamental frequency for a window or two right after an onset. A keyboard
//! highlighting the detected key would then flicker between octaves. This crate
//! provides the pieces needed to avoid that, and to step through a precomputed
//! timeline of expected notes:
//!
//! * [`PitchMap`](pitch_map::PitchMap): an immutable, time ordered list of expected note events.
//! * [`Navigator`](pitch_map::Navigator): a cursor over a pitch map with sticky boundaries.
//! * [`HarmonicJumpFilter`](harmonic::HarmonicJumpFilter): classifies octave jumps on short notes as detector artifacts.
//! * [`ActiveNote`](note::ActiveNote): the currently sounding note, live or synthesized from the map.
//! * [`Session`](session::Session): ties the above together and reports active note changes.
//!
//! Features
//! * `no_std` compatible, only needs `alloc`.
//! * Runtime paths never fail. Empty maps, bootstrap misses and unusable samples degrade gracefully.
//! * Diagnostics go through the [log](https://docs.rs/log) facade.
//!
//! # Examples
//!
//! ```
//! use pitchnav::pitch_map::{Direction, PitchMap};
//! use pitchnav::session::{NavigationCommand, PitchSample, Session};
//!
//! // C4, D4, E4 one second apart
//! let map = PitchMap::from_frequencies(&[(0.0, 261.63), (1.0, 293.66), (2.0, 329.63)]).unwrap();
//! let mut session = Session::new(map);
//!
//! // Seek forward from t = 0.5 s. This lands on D4.
//! let command = NavigationCommand::new(0.5, Direction::Forward, 10.0);
//! let event = session.navigate(command, |change| {
//!     println!("Highlight {} ({} Hz)", change.key_id, change.frequency);
//! });
//! assert_eq!(event.unwrap().key_id.as_str(), "D4");
//!
//! // A live detection one octave up 10 ms later is rejected as a harmonic.
//! session.push_sample(PitchSample::new(2.0 * 293.66, 10.01), |_| {
//!     assert!(false);
//! });
//! assert_eq!(session.stats().harmonics_rejected, 1);
//! ```

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod common;
mod error;
pub mod harmonic;
pub mod note;
pub mod pitch_map;
pub mod session;

pub use error::{Error, Result};
