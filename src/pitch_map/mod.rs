//! A precomputed, time ordered map of expected note events and a cursor
//! for stepping through it.
//!
//! The map itself is immutable once built and can be shared freely, for example
//! with rendering code. All cursor state lives in a [`Navigator`], which
//! is owned by whoever issues seek requests.
//!
//! # Examples
//!
//! ```
//! use pitchnav::pitch_map::{Direction, KeyId, Navigator, NoteEvent, PitchMap};
//!
//! let map = PitchMap::new(vec![
//!     NoteEvent::new(0.0, KeyId::new("C4"), 261.63),
//!     NoteEvent::new(1.0, KeyId::new("D4"), 293.66),
//!     NoteEvent::new(2.0, KeyId::new("E4"), 329.63),
//! ]).unwrap();
//!
//! let mut navigator = Navigator::new();
//! // The first call places the cursor relative to the given time...
//! assert_eq!(navigator.navigate(&map, 0.5, Direction::Forward).unwrap().key_id.as_str(), "D4");
//! // ...subsequent calls step one event at a time and stick at the ends.
//! assert_eq!(navigator.navigate(&map, 0.5, Direction::Forward).unwrap().key_id.as_str(), "E4");
//! assert_eq!(navigator.navigate(&map, 0.5, Direction::Forward).unwrap().key_id.as_str(), "E4");
//! ```

mod map;
mod navigator;
mod note_event;

pub use map::PitchMap;
pub use navigator::{Direction, Navigator};
pub use note_event::{KeyId, NoteEvent};
