use alloc::format;
use micromath::F32Ext;

use crate::pitch_map::KeyId;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Converts a frequency in Hz to a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number (with a fractional part).
pub fn freq_to_midi_note(freq: f32) -> f32 {
    12.0 * F32Ext::log2(freq) - 36.376316562295926
}

/// Returns the MIDI note closest to `freq`, or `None` if `freq` is not
/// a positive finite number or falls outside the MIDI note range.
pub fn nearest_midi_note(freq: f32) -> Option<u8> {
    if !freq.is_finite() || freq <= 0.0 {
        return None;
    }
    let note_number = F32Ext::round(freq_to_midi_note(freq));
    if note_number < 0.0 || note_number > 127.0 {
        None
    } else {
        Some(note_number as u8)
    }
}

/// Returns the key name of a MIDI note, using sharps and scientific
/// octave numbering, i.e MIDI note 60 is `C4` and 69 is `A4`.
pub fn midi_note_to_key_id(note_number: u8) -> KeyId {
    let octave = (note_number / 12) as i32 - 1;
    let name = NOTE_NAMES[(note_number % 12) as usize];
    KeyId::new(format!("{}{}", name, octave))
}

/// Returns the key name of the MIDI note closest to `freq`.
pub fn key_id_for_frequency(freq: f32) -> Option<KeyId> {
    nearest_midi_note(freq).map(midi_note_to_key_id)
}
