use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::common::key_id_for_frequency;
use crate::error::{Error, Result};
use crate::pitch_map::NoteEvent;

/// An immutable sequence of note events, sorted by ascending time.
///
/// Events with equal times are allowed and keep their relative order.
/// Navigation works on positions in the sequence, see [`Navigator`](super::Navigator).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PitchMap {
    events: Vec<NoteEvent>,
}

fn validate_events(events: &[NoteEvent]) -> Result<()> {
    let mut previous_time = 0.0_f64;
    for (index, event) in events.iter().enumerate() {
        if !event.time.is_finite() || event.time < 0.0 {
            return Err(Error::InvalidTime {
                index,
                time: event.time,
            });
        }
        if !event.frequency.is_finite() || event.frequency <= 0.0 {
            return Err(Error::InvalidFrequency {
                index,
                frequency: event.frequency,
            });
        }
        if index > 0 && event.time < previous_time {
            return Err(Error::UnsortedTimes {
                index,
                previous: previous_time,
                time: event.time,
            });
        }
        previous_time = event.time;
    }
    Ok(())
}

impl PitchMap {
    /// Creates a pitch map from events already sorted by time.
    pub fn new(events: Vec<NoteEvent>) -> Result<Self> {
        validate_events(&events)?;
        Ok(PitchMap { events })
    }

    /// Creates a pitch map from events in any order. Events with equal
    /// times keep their relative order.
    pub fn from_unsorted(mut events: Vec<NoteEvent>) -> Result<Self> {
        events.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
        PitchMap::new(events)
    }

    /// Creates a pitch map from sorted `(time, frequency)` pairs. The key of each
    /// event is the MIDI note closest to its frequency.
    pub fn from_frequencies(notes: &[(f64, f32)]) -> Result<Self> {
        let mut events = Vec::with_capacity(notes.len());
        for (index, (time, frequency)) in notes.iter().enumerate() {
            if !frequency.is_finite() || *frequency <= 0.0 {
                return Err(Error::InvalidFrequency {
                    index,
                    frequency: *frequency,
                });
            }
            let key_id = key_id_for_frequency(*frequency).ok_or(Error::NoteOutOfRange {
                index,
                frequency: *frequency,
            })?;
            events.push(NoteEvent::new(*time, key_id, *frequency));
        }
        PitchMap::new(events)
    }

    /// Creates a pitch map without any events.
    pub fn empty() -> Self {
        PitchMap { events: Vec::new() }
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NoteEvent> {
        self.events.get(index)
    }

    pub fn first(&self) -> Option<&NoteEvent> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&NoteEvent> {
        self.events.last()
    }

    /// The time of the last event, or 0 for an empty map.
    pub fn duration(&self) -> f64 {
        self.events.last().map(|e| e.time).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch_map::KeyId;
    use alloc::vec;

    #[test]
    fn test_sorted_events() {
        let map = PitchMap::new(vec![
            NoteEvent::new(0.0, KeyId::new("C4"), 261.63),
            NoteEvent::new(1.0, KeyId::new("D4"), 293.66),
            NoteEvent::new(1.0, KeyId::new("F4"), 349.23),
        ])
        .unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.first().unwrap().key_id.as_str(), "C4");
        assert_eq!(map.last().unwrap().key_id.as_str(), "F4");
        assert_eq!(map.duration(), 1.0);
    }

    #[test]
    fn test_unsorted_events_rejected() {
        let result = PitchMap::new(vec![
            NoteEvent::new(1.0, KeyId::new("D4"), 293.66),
            NoteEvent::new(0.5, KeyId::new("C4"), 261.63),
        ]);
        assert_eq!(
            result,
            Err(Error::UnsortedTimes {
                index: 1,
                previous: 1.0,
                time: 0.5
            })
        );
    }

    #[test]
    fn test_from_unsorted() {
        let map = PitchMap::from_unsorted(vec![
            NoteEvent::new(2.0, KeyId::new("E4"), 329.63),
            NoteEvent::new(0.0, KeyId::new("C4"), 261.63),
            NoteEvent::new(1.0, KeyId::new("D4"), 293.66),
            NoteEvent::new(0.0, KeyId::new("G4"), 392.0),
        ])
        .unwrap();
        let keys: Vec<&str> = map.events().iter().map(|e| e.key_id.as_str()).collect();
        assert_eq!(keys, vec!["C4", "G4", "D4", "E4"]);
    }

    #[test]
    fn test_invalid_events() {
        assert_eq!(
            PitchMap::new(vec![NoteEvent::new(-1.0, KeyId::new("C4"), 261.63)]),
            Err(Error::InvalidTime {
                index: 0,
                time: -1.0
            })
        );
        assert_eq!(
            PitchMap::new(vec![
                NoteEvent::new(0.0, KeyId::new("C4"), 261.63),
                NoteEvent::new(1.0, KeyId::new("C4"), 0.0)
            ]),
            Err(Error::InvalidFrequency {
                index: 1,
                frequency: 0.0
            })
        );
        assert!(matches!(
            PitchMap::new(vec![NoteEvent::new(f64::NAN, KeyId::new("C4"), 261.63)]),
            Err(Error::InvalidTime { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_frequencies() {
        let map = PitchMap::from_frequencies(&[(0.0, 261.63), (0.5, 440.0), (1.0, 880.0)]).unwrap();
        let keys: Vec<&str> = map.events().iter().map(|e| e.key_id.as_str()).collect();
        assert_eq!(keys, vec!["C4", "A4", "A5"]);

        assert_eq!(
            PitchMap::from_frequencies(&[(0.0, 100_000.0)]),
            Err(Error::NoteOutOfRange {
                index: 0,
                frequency: 100_000.0
            })
        );
        assert_eq!(
            PitchMap::from_frequencies(&[(0.0, 440.0), (1.0, -1.0)]),
            Err(Error::InvalidFrequency {
                index: 1,
                frequency: -1.0
            })
        );
    }

    #[test]
    fn test_empty_map() {
        let map = PitchMap::empty();
        assert!(map.is_empty());
        assert!(map.first().is_none());
        assert_eq!(map.duration(), 0.0);
        assert_eq!(map, PitchMap::new(Vec::new()).unwrap());
    }
}
