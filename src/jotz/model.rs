use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest title the input surfaces accept. Applied where a title is typed
/// (drafts, CLI args), not to whatever is already in the slot.
pub const TITLE_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub updated: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            updated: Utc::now(),
        }
    }
}

/// In-flight edit buffer. Lives only inside a session's edit state and is
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let mut draft = Self {
            title: String::new(),
            content: content.into(),
        };
        draft.set_title(title.into());
        draft
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    /// Captures a typed title, cutting it off at [`TITLE_MAX_LEN`] characters.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = if title.chars().count() > TITLE_MAX_LEN {
            title.chars().take(TITLE_MAX_LEN).collect()
        } else {
            title
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_gets_fresh_id_and_timestamp() {
        let before = Utc::now();
        let note = Note::new("Groceries".to_string(), "milk".to_string());
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "milk");
        assert!(note.updated >= before);
    }

    #[test]
    fn set_title_caps_at_fifty_chars() {
        let mut draft = Draft::default();
        draft.set_title("x".repeat(80));
        assert_eq!(draft.title.chars().count(), TITLE_MAX_LEN);
    }

    #[test]
    fn set_title_keeps_short_titles_untouched() {
        let mut draft = Draft::default();
        draft.set_title("Groceries  ");
        assert_eq!(draft.title, "Groceries  ");
    }

    #[test]
    fn set_title_counts_chars_not_bytes() {
        let mut draft = Draft::default();
        draft.set_title("ä".repeat(60));
        assert_eq!(draft.title.chars().count(), TITLE_MAX_LEN);
        assert_eq!(draft.title, "ä".repeat(TITLE_MAX_LEN));
    }

    #[test]
    fn draft_new_routes_through_the_cap() {
        let draft = Draft::new("y".repeat(70), "body");
        assert_eq!(draft.title.chars().count(), TITLE_MAX_LEN);
        assert_eq!(draft.content, "body");
    }

    #[test]
    fn from_note_does_not_re_cap_stored_titles() {
        let mut note = Note::new("t".to_string(), String::new());
        note.title = "z".repeat(90);
        let draft = Draft::from_note(&note);
        assert_eq!(draft.title.chars().count(), 90);
    }
}
