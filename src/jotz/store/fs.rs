use super::SlotStore;
use crate::error::{JotzError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

pub const SLOT_FILENAME: &str = "notes.json";

/// Production slot: one JSON array at `<dir>/notes.json`.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SLOT_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(JotzError::Io)?;
            }
        }
        Ok(())
    }
}

impl SlotStore for FileSlot {
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(JotzError::Io)?;
        // Malformed content counts as empty, not as an error
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(notes).map_err(JotzError::Serialization)?;
        fs::write(&self.path, content).map_err(JotzError::Io)?;
        Ok(())
    }
}
