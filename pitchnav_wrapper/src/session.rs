use std::sync::{Mutex, MutexGuard};

use pitchnav::common::nearest_midi_note;
use pitchnav::pitch_map::{Direction, PitchMap};
use pitchnav::session::{NavigationCommand, PitchSample, SampleOutcome, Session};

struct SessionWrapper {
    session: Session,
    change_count: u64,
}

lazy_static! {
    static ref SESSION_WRAPPER: Mutex<SessionWrapper> = Mutex::new(SessionWrapper {
        session: Session::new(PitchMap::empty()),
        change_count: 0
    });
}

fn lock_wrapper() -> MutexGuard<'static, SessionWrapper> {
    // Ignore poisoning
    SESSION_WRAPPER.lock().unwrap_or_else(|e| e.into_inner())
}

fn outcome_code(outcome: SampleOutcome) -> i32 {
    match outcome {
        SampleOutcome::Invalid => -1,
        SampleOutcome::RejectedHarmonic => 0,
        SampleOutcome::Updated => 1,
        SampleOutcome::UpdateSkipped => 2,
        SampleOutcome::Onset => 3,
    }
}

/// Replaces the pitch map with `len` events read from `raw_times` (seconds)
/// and `raw_frequencies` (Hz), and resets the session. Returns false and keeps
/// the current map if the events are invalid.
#[no_mangle]
pub extern "C" fn pitchnav_load_map(
    raw_times: *const f64,
    raw_frequencies: *const f32,
    len: usize,
) -> bool {
    let notes: Vec<(f64, f32)> = if len == 0 {
        Vec::new()
    } else {
        let times: &[f64] = unsafe { std::slice::from_raw_parts(raw_times, len) };
        let frequencies: &[f32] = unsafe { std::slice::from_raw_parts(raw_frequencies, len) };
        times.iter().copied().zip(frequencies.iter().copied()).collect()
    };

    match PitchMap::from_frequencies(&notes) {
        Ok(map) => {
            let wrapper = &mut lock_wrapper();
            wrapper.session.load_pitch_map(map);
            wrapper.change_count = 0;
            true
        }
        Err(e) => {
            log::warn!("Rejected pitch map: {}", e);
            false
        }
    }
}

/// Returns -1 for an invalid sample, 0 for a rejected harmonic, 1 for an
/// update, 2 for a skipped update and 3 for a new onset.
#[no_mangle]
pub extern "C" fn pitchnav_push_sample(frequency: f32, timestamp: f64) -> i32 {
    let wrapper = &mut lock_wrapper();
    let mut change_count = wrapper.change_count;
    let outcome = wrapper
        .session
        .push_sample(PitchSample::new(frequency, timestamp), |_| change_count += 1);
    wrapper.change_count = change_count;
    outcome_code(outcome)
}

/// Returns the cursor position after navigating, or -1 if the map is empty.
#[no_mangle]
pub extern "C" fn pitchnav_navigate(current_time: f64, forward: bool, timestamp: f64) -> i64 {
    let wrapper = &mut lock_wrapper();
    let direction = if forward {
        Direction::Forward
    } else {
        Direction::Backward
    };
    let mut change_count = wrapper.change_count;
    let command = NavigationCommand::new(current_time, direction, timestamp);
    let navigated = wrapper
        .session
        .navigate(command, |_| change_count += 1)
        .is_some();
    wrapper.change_count = change_count;
    if navigated {
        match wrapper.session.navigator().index() {
            Some(index) => index as i64,
            None => -1,
        }
    } else {
        -1
    }
}

#[no_mangle]
pub extern "C" fn pitchnav_reset() {
    let wrapper = &mut lock_wrapper();
    wrapper.session.reset();
    wrapper.change_count = 0;
}

/// The number of active note changes since the last reset. Lets the host
/// poll for changes instead of receiving callbacks.
#[no_mangle]
pub extern "C" fn pitchnav_change_count() -> u64 {
    lock_wrapper().change_count
}

/// The frequency of the active note, or 0 if there is none.
#[no_mangle]
pub extern "C" fn pitchnav_active_frequency() -> f32 {
    let wrapper = lock_wrapper();
    wrapper
        .session
        .active_note()
        .map(|note| note.current_frequency())
        .unwrap_or(0.0)
}

/// The MIDI note closest to the active note's frequency, or -1 if there is none.
#[no_mangle]
pub extern "C" fn pitchnav_active_midi_note() -> i32 {
    let wrapper = lock_wrapper();
    wrapper
        .session
        .active_note()
        .and_then(|note| nearest_midi_note(note.current_frequency()))
        .map(|note_number| note_number as i32)
        .unwrap_or(-1)
}

/// Whether the active note was synthesized from the pitch map.
#[no_mangle]
pub extern "C" fn pitchnav_active_is_protected() -> bool {
    let wrapper = lock_wrapper();
    wrapper
        .session
        .active_note()
        .map(|note| !note.accepts_updates())
        .unwrap_or(false)
}

/// Index of the event under the cursor, or -1 if the cursor is unset.
#[no_mangle]
pub extern "C" fn pitchnav_current_index() -> i64 {
    match lock_wrapper().session.navigator().index() {
        Some(index) => index as i64,
        None => -1,
    }
}

#[no_mangle]
pub extern "C" fn pitchnav_harmonics_rejected() -> u64 {
    lock_wrapper().session.stats().harmonics_rejected
}

#[cfg(test)]
mod tests {
    use super::*;

    // The wrapper holds a single global session, so everything is
    // exercised from one test.
    #[test]
    fn test_global_session() {
        let times = [0.0_f64, 1.0, 2.0];
        let frequencies = [261.63_f32, 293.66, 329.63];
        assert!(pitchnav_load_map(times.as_ptr(), frequencies.as_ptr(), times.len()));
        assert_eq!(pitchnav_current_index(), -1);

        assert_eq!(pitchnav_navigate(0.5, true, 10.0), 1);
        assert_eq!(pitchnav_current_index(), 1);
        assert_eq!(pitchnav_active_midi_note(), 62);
        assert!(pitchnav_active_is_protected());
        assert_eq!(pitchnav_navigate(0.5, true, 10.0), 2);
        assert_eq!(pitchnav_navigate(0.5, true, 10.0), 2);
        assert_eq!(pitchnav_change_count(), 3);

        // Octave above E4 right after the seek
        assert_eq!(pitchnav_push_sample(659.26, 10.01), 0);
        assert_eq!(pitchnav_harmonics_rejected(), 1);
        assert_eq!(pitchnav_push_sample(329.0, 10.02), 2);
        assert_eq!(pitchnav_push_sample(440.0, 10.03), 3);
        assert_eq!(pitchnav_active_frequency(), 440.0);
        assert!(!pitchnav_active_is_protected());
        assert_eq!(pitchnav_push_sample(0.0, 10.04), -1);

        pitchnav_reset();
        assert_eq!(pitchnav_active_frequency(), 0.0);
        assert_eq!(pitchnav_active_midi_note(), -1);
        assert_eq!(pitchnav_change_count(), 0);
        assert_eq!(pitchnav_navigate(1.5, false, 20.0), 1);

        let bad_times = [1.0_f64, 0.0];
        let bad_frequencies = [440.0_f32, 440.0];
        assert!(!pitchnav_load_map(bad_times.as_ptr(), bad_frequencies.as_ptr(), 2));

        assert!(pitchnav_load_map(std::ptr::null(), std::ptr::null(), 0));
        assert_eq!(pitchnav_navigate(0.0, true, 30.0), -1);
    }
}
