//! The currently sounding note.
//!
//! A note either comes from a live detection or is synthesized from the pitch
//! map when the user seeks. Synthesized notes are protected: the update and
//! cleanup paths leave them alone until a genuine onset replaces them.

mod active_note;

pub use active_note::{ActiveNote, NoteOrigin, UpdateOutcome};
