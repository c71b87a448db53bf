//! # Derived View State
//!
//! The filtered list and the effective selection are never stored; they are
//! recomputed from the raw inputs (all notes, the search text, the previously
//! selected id) by [`derive`]. Anything that changes the store or the search
//! goes through this one function instead of patching selection by hand, so
//! stale-selection bugs have nowhere to live.
//!
//! ## Ordering
//!
//! Notes keep **store order** (newest first, because creates prepend).
//! Filtering removes entries but never reorders them; there is no ranking.
//!
//! ## Selection Rules
//!
//! Applied in order on every derive:
//! 1. Keep the previous selection if that note is still in the filtered list
//! 2. Otherwise fall back to the first filtered note
//! 3. Otherwise (empty list) no selection

use crate::model::Note;
use uuid::Uuid;

/// Snapshot of what the list surface shows: the filtered notes in store
/// order plus the note the selection lands on.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub notes: Vec<Note>,
    pub selected: Option<Uuid>,
}

impl View {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Resolves a 1-based list position, as printed next to each note.
    pub fn nth(&self, position: usize) -> Option<&Note> {
        position.checked_sub(1).and_then(|i| self.notes.get(i))
    }

    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// 1-based position of a note in the filtered list.
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id).map(|i| i + 1)
    }
}

/// Case-insensitive substring match on title or content. The query is
/// trimmed first; an empty or whitespace-only query matches everything.
pub fn note_matches(note: &Note, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
}

/// Recomputes the filtered list and the effective selection from raw state.
pub fn derive(notes: &[Note], search: &str, selected: Option<Uuid>) -> View {
    let filtered: Vec<Note> = notes
        .iter()
        .filter(|n| note_matches(n, search))
        .cloned()
        .collect();

    let selected = match selected {
        Some(id) if filtered.iter().any(|n| n.id == id) => Some(id),
        _ => filtered.first().map(|n| n.id),
    };

    View {
        notes: filtered,
        selected,
    }
}
