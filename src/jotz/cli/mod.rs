//! CLI layer: context wiring and the one-shot command handlers. Together
//! with `browse`, the only code that touches stdout/stderr.

pub mod browse;
pub mod print;
pub mod styles;

use directories::ProjectDirs;
use jotz::editor;
use jotz::error::{JotzError, Result};
use jotz::model::Draft;
use jotz::session::Session;
use jotz::store::fs::FileSlot;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct AppContext {
    pub session: Session<FileSlot>,
    pub slot_path: PathBuf,
}

/// Resolves the directory holding the notes file: `$JOTZ_HOME` when set,
/// otherwise the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("JOTZ_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "jotz", "jotz")
        .ok_or_else(|| JotzError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub fn init_context() -> Result<AppContext> {
    let slot = FileSlot::new(data_dir()?);
    let slot_path = slot.path().to_path_buf();
    let session = Session::open(slot)?;
    Ok(AppContext { session, slot_path })
}

pub fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let initial = Draft::new(title.unwrap_or_default(), content.unwrap_or_default());
    let draft = if no_editor {
        initial
    } else {
        editor::edit_draft(&initial)?
    };

    ctx.session.begin_create();
    ctx.session.set_draft(draft)?;
    let id = ctx.session.save()?;

    let title = ctx
        .session
        .get(id)
        .map(|n| n.title.clone())
        .unwrap_or_default();
    print::success(&format!("Note created: {}", title));
    Ok(())
}

pub fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    if let Some(term) = search {
        ctx.session.set_search(term);
    }
    let view = ctx.session.view();
    print::note_list(&view.notes, None);
    Ok(())
}

pub fn handle_view(ctx: &AppContext, index: Option<usize>) -> Result<()> {
    let view = ctx.session.view();
    let note = match index {
        Some(n) => view
            .nth(n)
            .ok_or_else(|| JotzError::Api(format!("No note at index {}", n)))?,
        None => view
            .selected_note()
            .ok_or_else(|| JotzError::Api("No notes yet".to_string()))?,
    };
    print::note_full(note);
    Ok(())
}

pub fn handle_edit(ctx: &mut AppContext, index: usize) -> Result<()> {
    let view = ctx.session.view();
    let id = view
        .nth(index)
        .map(|n| n.id)
        .ok_or_else(|| JotzError::Api(format!("No note at index {}", index)))?;

    ctx.session.begin_edit(id)?;
    let initial = ctx
        .session
        .edit_state()
        .draft()
        .cloned()
        .unwrap_or_default();
    let edited = editor::edit_draft(&initial)?;
    ctx.session.set_draft(edited)?;
    ctx.session.save()?;

    let title = ctx
        .session
        .get(id)
        .map(|n| n.title.clone())
        .unwrap_or_default();
    print::success(&format!("Note updated: {}", title));
    Ok(())
}

pub fn handle_delete(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let view = ctx.session.view();
    let (id, title) = view
        .nth(index)
        .map(|n| (n.id, n.title.clone()))
        .ok_or_else(|| JotzError::Api(format!("No note at index {}", index)))?;

    if !yes {
        let mut lines = io::stdin().lock().lines();
        if !confirm_delete(&mut lines, &title)? {
            print::info("Operation cancelled.");
            return Ok(());
        }
    }

    let removed = ctx.session.delete(id)?;
    print::success(&format!("Note deleted: {}", removed.title));
    Ok(())
}

pub fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.slot_path.display());
    Ok(())
}

/// Gate for the irreversible delete: only a full "Y" goes through.
pub(crate) fn confirm_delete<R>(lines: &mut R, title: &str) -> Result<bool>
where
    R: Iterator<Item = io::Result<String>>,
{
    println!("This will permanently remove: {}", title);
    print!("[Y] To delete: ");
    io::stdout().flush().map_err(JotzError::Io)?;

    match lines.next() {
        Some(line) => Ok(line.map_err(JotzError::Io)?.trim() == "Y"),
        None => Ok(false),
    }
}
