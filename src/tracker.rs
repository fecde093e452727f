//! Active note tracking: the producer side of the layout engine.
//!
//! The MIDI thread records note-on/off events into [`ActiveNotes`]; the UI
//! thread copies the set out with [`ActiveNotes::snapshot`] and hands the
//! copy to the layout engine, so the engine never sees the set mutate.
//! [`NoteSlots`] carries a snapshot across a host that only transports
//! normalized parameter values.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, StaffError};
use crate::model::{MidiNote, MAX_MIDI_NOTE};

// ═══════════════════════════════════════════════════════════════════════
// MIDI events
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { pitch: u8, velocity: u8 },
    NoteOff { pitch: u8 },
}

impl MidiEvent {
    /// Decode a channel-voice note message on any channel. Anything else
    /// (controllers, sysex, running status) yields `None`.
    pub fn parse(bytes: &[u8]) -> Option<MidiEvent> {
        let [status, pitch, velocity, ..] = *bytes else {
            return None;
        };
        if pitch > MAX_MIDI_NOTE || velocity > 127 {
            return None;
        }
        match status & 0xF0 {
            0x90 => Some(MidiEvent::NoteOn { pitch, velocity }),
            0x80 => Some(MidiEvent::NoteOff { pitch }),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ActiveNotes
// ═══════════════════════════════════════════════════════════════════════

/// Thread-safe set of currently held notes.
#[derive(Debug, Default)]
pub struct ActiveNotes {
    notes: Mutex<BTreeSet<MidiNote>>,
    changed: AtomicBool,
}

impl ActiveNotes {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeSet<MidiNote>> {
        // set operations never leave the tree half-updated, so a poisoned lock is still usable
        self.notes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Velocity 0 is a note-off, as in running-status MIDI streams.
    pub fn note_on(&self, pitch: MidiNote, velocity: u8) {
        if velocity == 0 {
            self.note_off(pitch);
            return;
        }
        if pitch > MAX_MIDI_NOTE {
            log::warn!("ignoring note-on for out-of-range pitch {pitch}");
            return;
        }
        self.lock().insert(pitch);
        self.changed.store(true, Ordering::Release);
    }

    pub fn note_off(&self, pitch: MidiNote) {
        self.lock().remove(&pitch);
        self.changed.store(true, Ordering::Release);
    }

    pub fn handle(&self, event: MidiEvent) {
        match event {
            MidiEvent::NoteOn { pitch, velocity } => self.note_on(pitch, velocity),
            MidiEvent::NoteOff { pitch } => self.note_off(pitch),
        }
    }

    pub fn process<I>(&self, events: I)
    where
        I: IntoIterator<Item = MidiEvent>,
    {
        for event in events {
            self.handle(event);
        }
    }

    /// Drop every held note (the processor was deactivated).
    pub fn clear(&self) {
        self.lock().clear();
        self.changed.store(true, Ordering::Release);
    }

    /// Ascending copy of the held notes, taken under the lock.
    pub fn snapshot(&self) -> Vec<MidiNote> {
        self.lock().iter().copied().collect()
    }

    /// A snapshot if anything changed since the previous call.
    pub fn take_changed(&self) -> Option<Vec<MidiNote>> {
        if self.changed.swap(false, Ordering::AcqRel) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// NoteSlots
// ═══════════════════════════════════════════════════════════════════════

/// Number of notes carried by the parameter transport.
pub const NOTE_SLOT_COUNT: usize = 10;

/// Receiving end of the parameter transport: one normalized value per slot,
/// `note / 127`, with 0.0 meaning an empty slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteSlots {
    slots: [Option<MidiNote>; NOTE_SLOT_COUNT],
}

impl NoteSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender side: the first ten notes of a snapshot, ascending, as
    /// normalized values. Note 0 encodes like an empty slot.
    pub fn encode(snapshot: &[MidiNote]) -> [f64; NOTE_SLOT_COUNT] {
        let mut sorted = snapshot.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() > NOTE_SLOT_COUNT {
            log::debug!("{} notes held, transporting the lowest {NOTE_SLOT_COUNT}", sorted.len());
        }

        let mut values = [0.0; NOTE_SLOT_COUNT];
        for (value, &note) in values.iter_mut().zip(sorted.iter()) {
            *value = note as f64 / MAX_MIDI_NOTE as f64;
        }
        values
    }

    /// Apply one slot update from the host. A value that decodes past
    /// note 127 leaves the slot unchanged.
    pub fn set_normalized(&mut self, slot: usize, value: f64) -> Result<()> {
        let entry = self.slots.get_mut(slot).ok_or(StaffError::SlotOutOfRange(slot))?;
        if !(value > 0.0 && value.is_finite()) {
            *entry = None;
            return Ok(());
        }

        let note = (value * MAX_MIDI_NOTE as f64 + 0.5).floor();
        if note > MAX_MIDI_NOTE as f64 {
            log::warn!("slot {slot} value {value} decodes past note 127, keeping {entry:?}");
        } else {
            *entry = Some(note as MidiNote);
        }
        Ok(())
    }

    /// Apply a full frame of slot values.
    pub fn set_all(&mut self, values: &[f64; NOTE_SLOT_COUNT]) {
        for (slot, &value) in values.iter().enumerate() {
            // slot is always in range here
            let _ = self.set_normalized(slot, value);
        }
    }

    pub fn get(&self, slot: usize) -> Option<MidiNote> {
        self.slots.get(slot).copied().flatten()
    }

    /// Notes in occupied slots, in slot order.
    pub fn active_notes(&self) -> Vec<MidiNote> {
        self.slots.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_note_messages_on_any_channel() {
        assert_eq!(MidiEvent::parse(&[0x90, 60, 100]), Some(MidiEvent::NoteOn { pitch: 60, velocity: 100 }));
        assert_eq!(MidiEvent::parse(&[0x93, 61, 1]), Some(MidiEvent::NoteOn { pitch: 61, velocity: 1 }));
        assert_eq!(MidiEvent::parse(&[0x8F, 62, 0]), Some(MidiEvent::NoteOff { pitch: 62 }));
        assert_eq!(MidiEvent::parse(&[0xB0, 64, 127]), None);
        assert_eq!(MidiEvent::parse(&[0x90, 60]), None);
        assert_eq!(MidiEvent::parse(&[0x90, 200, 10]), None);
    }

    #[test]
    fn velocity_zero_releases() {
        let notes = ActiveNotes::new();
        notes.note_on(60, 90);
        notes.note_on(60, 0);
        assert!(notes.is_empty());
    }

    #[test]
    fn take_changed_reports_once() {
        let notes = ActiveNotes::new();
        assert_eq!(notes.take_changed(), None);
        notes.note_on(64, 80);
        notes.note_on(60, 80);
        assert_eq!(notes.take_changed(), Some(vec![60, 64]));
        assert_eq!(notes.take_changed(), None);
        notes.clear();
        assert_eq!(notes.take_changed(), Some(vec![]));
    }

    #[test]
    fn slot_decoding_rounds_to_nearest_note() {
        let mut slots = NoteSlots::new();
        slots.set_normalized(0, 60.0 / 127.0).unwrap();
        slots.set_normalized(1, 64.4 / 127.0).unwrap();
        assert_eq!(slots.active_notes(), vec![60, 64]);
        slots.set_normalized(0, 0.0).unwrap();
        assert_eq!(slots.get(0), None);
        assert!(matches!(slots.set_normalized(10, 0.5), Err(StaffError::SlotOutOfRange(10))));
    }

    #[test]
    fn overrange_value_keeps_the_previous_note() {
        let mut slots = NoteSlots::new();
        slots.set_normalized(0, 60.0 / 127.0).unwrap();
        slots.set_normalized(0, 1.5).unwrap();
        assert_eq!(slots.get(0), Some(60));

        slots.set_normalized(1, 2.0).unwrap();
        assert_eq!(slots.get(1), None);
    }

    #[test]
    fn encode_keeps_the_lowest_ten() {
        let held: Vec<MidiNote> = (50..65).rev().collect();
        let values = NoteSlots::encode(&held);
        assert_eq!(values[0], 50.0 / 127.0);
        assert_eq!(values[9], 59.0 / 127.0);

        let sparse = NoteSlots::encode(&[72]);
        assert_eq!(sparse[0], 72.0 / 127.0);
        assert!(sparse[1..].iter().all(|&v| v == 0.0));
    }
}
