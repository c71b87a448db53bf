//! # Session Facade
//!
//! The session is the single entry point for all jotz operations, regardless
//! of the UI driving it. It owns the loaded notes, the search text, the
//! selection, and the edit state, and persists the whole collection through
//! its [`SlotStore`] after every mutation.
//!
//! ## Role and Responsibilities
//!
//! The session:
//! - **Loads once**: the slot is read at `open` and held in memory
//! - **Persists on change**: create, update, and delete rewrite the slot
//!   before they return
//! - **Re-derives**: after every store or search change the selection is
//!   recomputed through [`view::derive`], never patched by hand
//!
//! ## What the Session Does NOT Do
//!
//! - **I/O to the terminal**: no stdout, stderr, or prompts
//! - **Presentation**: returns data structures, not strings
//! - **Confirmation**: deleting is assumed to be already confirmed by the
//!   caller; the session just does it
//!
//! ## Generic Over SlotStore
//!
//! `Session<S: SlotStore>` is generic over the storage backend:
//! - Production: `Session<FileSlot>`
//! - Testing: `Session<MemorySlot>`

use crate::error::{JotzError, Result};
use crate::model::{Draft, Note};
use crate::store::SlotStore;
use crate::view::{self, View};
use chrono::Utc;
use uuid::Uuid;

/// What the user is doing with the draft buffer, as an explicit union.
/// There is exactly one buffer; starting a new edit replaces whatever was
/// in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Creating(Draft),
    Editing(Uuid, Draft),
}

impl EditState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditState::Idle)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditState::Idle => None,
            EditState::Creating(draft) | EditState::Editing(_, draft) => Some(draft),
        }
    }
}

/// The main facade for note operations.
pub struct Session<S: SlotStore> {
    slot: S,
    notes: Vec<Note>,
    search: String,
    selected: Option<Uuid>,
    edit: EditState,
}

impl<S: SlotStore> Session<S> {
    /// Loads the slot and derives the initial selection. A missing or
    /// corrupt slot opens as an empty session; only hard IO errors fail.
    pub fn open(slot: S) -> Result<Self> {
        let notes = slot.load()?;
        let mut session = Self {
            slot,
            notes,
            search: String::new(),
            selected: None,
            edit: EditState::Idle,
        };
        session.reselect();
        Ok(session)
    }

    // --- Reads ---

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Filtered list plus effective selection, recomputed on demand.
    pub fn view(&self) -> View {
        view::derive(&self.notes, &self.search, self.selected)
    }

    // --- View state ---

    /// Replaces the search text and runs the reselect rule: a selection
    /// hidden by the new filter falls back to the first visible note.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.reselect();
    }

    /// Moves the selection to `id` if that note exists; unknown ids are
    /// ignored. Selecting never changes the store or the search, so no
    /// reselect runs.
    pub fn select(&mut self, id: Uuid) {
        if self.notes.iter().any(|n| n.id == id) {
            self.selected = Some(id);
        }
    }

    fn reselect(&mut self) {
        self.selected = view::derive(&self.notes, &self.search, self.selected).selected;
    }

    // --- Store mutations ---

    /// Prepends a new note and selects it. The title is trimmed; an empty
    /// result leaves the store untouched.
    pub fn create(&mut self, title: &str, content: &str) -> Result<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return Err(JotzError::EmptyTitle);
        }

        let note = Note::new(title.to_string(), content.to_string());
        let id = note.id;
        self.notes.insert(0, note);
        self.persist()?;

        self.selected = Some(id);
        self.reselect();
        Ok(id)
    }

    /// Rewrites a note's title and content in place, keeping its position,
    /// and selects it.
    pub fn update(&mut self, id: Uuid, title: &str, content: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(JotzError::EmptyTitle);
        }

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(JotzError::NoteNotFound(id))?;
        note.title = title.to_string();
        note.content = content.to_string();
        note.updated = Utc::now();
        self.persist()?;

        self.selected = Some(id);
        self.reselect();
        Ok(())
    }

    /// Removes a note and returns it. Selection falls back through the
    /// reselect rule.
    pub fn delete(&mut self, id: Uuid) -> Result<Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(JotzError::NoteNotFound(id))?;
        let removed = self.notes.remove(pos);
        self.persist()?;

        self.reselect();
        Ok(removed)
    }

    fn persist(&mut self) -> Result<()> {
        self.slot.save(&self.notes)
    }

    // --- Edit state ---

    /// Opens an empty draft, replacing any draft already in flight.
    pub fn begin_create(&mut self) {
        self.edit = EditState::Creating(Draft::default());
    }

    /// Opens a draft copied from an existing note.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<()> {
        let note = self.get(id).ok_or(JotzError::NoteNotFound(id))?;
        self.edit = EditState::Editing(id, Draft::from_note(note));
        Ok(())
    }

    /// Replaces the in-flight draft wholesale (the editor round-trip hands
    /// back a fresh one).
    pub fn set_draft(&mut self, draft: Draft) -> Result<()> {
        match &mut self.edit {
            EditState::Idle => Err(JotzError::Api("No edit in progress".to_string())),
            EditState::Creating(d) | EditState::Editing(_, d) => {
                *d = draft;
                Ok(())
            }
        }
    }

    /// Commits the draft: `Creating` becomes a create, `Editing` an update.
    /// On failure (empty title, write error) the draft and state are kept so
    /// the caller can resume or discard; on success the session returns to
    /// `Idle`.
    pub fn save(&mut self) -> Result<Uuid> {
        let (target, draft) = match &self.edit {
            EditState::Idle => return Err(JotzError::Api("No edit in progress".to_string())),
            EditState::Creating(draft) => (None, draft.clone()),
            EditState::Editing(id, draft) => (Some(*id), draft.clone()),
        };

        let id = match target {
            None => self.create(&draft.title, &draft.content)?,
            Some(id) => {
                self.update(id, &draft.title, &draft.content)?;
                id
            }
        };

        self.edit = EditState::Idle;
        Ok(id)
    }

    /// Throws the draft away unconditionally.
    pub fn cancel(&mut self) {
        self.edit = EditState::Idle;
    }
}
