use crate::error::{JotzError, Result};
use crate::model::Draft;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Formats a draft for the editor buffer.
/// Format: title\n\ncontent
pub fn to_buffer(draft: &Draft) -> String {
    if draft.content.is_empty() {
        format!("{}\n\n", draft.title)
    } else {
        format!("{}\n\n{}", draft.title, draft.content)
    }
}

/// Parses an editor buffer back into a draft.
/// The first line is the title (capped like any typed title); one blank
/// line after it is the separator, everything else is content.
pub fn from_buffer(buffer: &str) -> Draft {
    let mut lines = buffer.lines();
    let title = lines.next().unwrap_or_default();

    let rest: Vec<&str> = lines.collect();
    let content = if rest.first().map(|l| l.trim().is_empty()).unwrap_or(false) {
        rest[1..].join("\n")
    } else {
        rest.join("\n")
    };

    let mut draft = Draft::default();
    draft.set_title(title);
    draft.content = content;
    draft
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(JotzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| JotzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(JotzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(JotzError::Io)
}

/// Round-trips a draft through the user's editor via a temp file.
/// The file name carries the pid so concurrent instances do not collide.
pub fn edit_draft(initial: &Draft) -> Result<Draft> {
    let temp_dir = env::temp_dir();
    let temp_file = temp_dir.join(format!("jotz_draft_{}.txt", std::process::id()));

    fs::write(&temp_file, to_buffer(initial)).map_err(JotzError::Io)?;

    let result = open_in_editor(&temp_file);

    let _ = fs::remove_file(&temp_file);

    Ok(from_buffer(&result?))
}
