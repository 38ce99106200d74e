//! Common algorithms and utilities.

mod midi;

pub use midi::{freq_to_midi_note, key_id_for_frequency, midi_note_to_key_id, nearest_midi_note};
