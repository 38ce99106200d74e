use crate::pitch_map::{NoteEvent, PitchMap};

/// The direction to move the cursor in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A cursor over a [`PitchMap`].
///
/// The cursor starts out unset. The first call to [`navigate`](Navigator::navigate)
/// places it relative to a playback time, every later call moves it exactly one
/// event. The cursor never leaves the map: moving past either end keeps it on the
/// first or last event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    index: Option<usize>,
}

/// Finds the cursor position for an unset cursor. Forward looks for the first
/// event at or after `current_time`, backward for the last event at or before it.
/// Falls back to the first event if there is no such event.
fn bootstrap_index(map: &PitchMap, current_time: f64, direction: Direction) -> usize {
    let events = map.events();
    let found = match direction {
        Direction::Forward => events.iter().position(|e| e.time >= current_time),
        Direction::Backward => events.iter().rposition(|e| e.time <= current_time),
    };
    found.unwrap_or(0)
}

impl Navigator {
    pub fn new() -> Self {
        Navigator { index: None }
    }

    /// Moves the cursor and returns the event it ends up on, or `None`
    /// if the map is empty.
    ///
    /// `current_time` is only used to place an unset cursor.
    pub fn navigate<'a>(
        &mut self,
        map: &'a PitchMap,
        current_time: f64,
        direction: Direction,
    ) -> Option<&'a NoteEvent> {
        if map.is_empty() {
            log::warn!("Pitch map is empty, nothing to navigate to");
            return None;
        }
        let last_index = map.len() - 1;

        let index = match self.index {
            None => {
                let index = bootstrap_index(map, current_time, direction);
                log::debug!(
                    "Placed cursor at {} for t = {:.2} s ({:?}, {} events)",
                    index,
                    current_time,
                    direction,
                    map.len()
                );
                index
            }
            Some(index) => {
                // The map may have been swapped for a shorter one
                let index = core::cmp::min(index, last_index);
                match direction {
                    Direction::Forward if index == last_index => {
                        log::info!("Reached end of map, staying on event {}", last_index);
                        last_index
                    }
                    Direction::Forward => index + 1,
                    Direction::Backward if index == 0 => {
                        log::info!("Reached start of map, staying on event 0");
                        0
                    }
                    Direction::Backward => index - 1,
                }
            }
        };

        self.index = Some(index);
        let event = map.get(index)?;
        log::debug!(
            "Navigated {:?} to {} at {:.2} s (event {}/{})",
            direction,
            event.key_id,
            event.time,
            index,
            map.len()
        );
        Some(event)
    }

    /// Returns the event under the cursor without moving it.
    pub fn current<'a>(&self, map: &'a PitchMap) -> Option<&'a NoteEvent> {
        self.index.and_then(|index| map.get(index))
    }

    /// The cursor position, or `None` if the cursor is unset.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Unsets the cursor. The next call to `navigate` places it from scratch.
    pub fn reset(&mut self) {
        self.index = None;
    }
}
