use super::SlotStore;
use crate::error::Result;
use crate::model::Note;

/// In-memory slot for testing and development.
/// Holds the raw serialized payload, so tests can seed it with anything a
/// real slot could contain, valid or not.
#[derive(Default)]
pub struct MemorySlot {
    raw: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with raw content.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The serialized payload as last written, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SlotStore for MemorySlot {
    fn load(&self) -> Result<Vec<Note>> {
        match &self.raw {
            Some(raw) => Ok(serde_json::from_str(raw).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        self.raw = Some(serde_json::to_string(notes)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct SlotFixture {
        pub slot: MemorySlot,
    }

    impl Default for SlotFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SlotFixture {
        pub fn new() -> Self {
            Self {
                slot: MemorySlot::new(),
            }
        }

        /// Seeds `count` notes titled "Note 1".."Note <count>", stored
        /// newest-first the way a live session leaves them after that many
        /// creates.
        pub fn with_notes(mut self, count: usize) -> Self {
            let notes: Vec<Note> = (1..=count)
                .rev()
                .map(|i| {
                    Note::new(
                        format!("Note {}", i),
                        format!("Content for note {}", i),
                    )
                })
                .collect();
            self.slot.save(&notes).unwrap();
            self
        }

        /// Prepends one note with the given title and content.
        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            let mut notes = self.slot.load().unwrap();
            notes.insert(0, Note::new(title.to_string(), content.to_string()));
            self.slot.save(&notes).unwrap();
            self
        }

        /// Replaces the slot content with something that will not parse.
        pub fn corrupted(mut self) -> Self {
            self.slot = MemorySlot::with_raw("definitely-not-json{");
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_slot_loads_empty() {
        let slot = MemorySlot::new();
        assert!(slot.load().unwrap().is_empty());
        assert!(slot.raw().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut slot = MemorySlot::new();
        let notes = vec![Note::new("Groceries".to_string(), "milk".to_string())];
        slot.save(&notes).unwrap();
        assert_eq!(slot.load().unwrap(), notes);
    }

    #[test]
    fn corrupt_raw_loads_as_empty() {
        let slot = MemorySlot::with_raw("][ garbage");
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn non_array_raw_loads_as_empty() {
        let slot = MemorySlot::with_raw(r#"{"id": 1}"#);
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn fixture_seeds_newest_first() {
        let fixture = fixtures::SlotFixture::new().with_notes(3);
        let notes = fixture.slot.load().unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].title, "Note 3");
        assert_eq!(notes[2].title, "Note 1");
    }
}
