//! Interactive browse mode: the whole surface on one screen. Each pass
//! renders the filtered list plus the selected note, then reads one line
//! and dispatches it. Status lines from the previous action are carried
//! into the next render instead of being wiped by the screen clear.

use super::print::{self, Notice};
use super::styles;
use super::AppContext;
use console::Term;
use jotz::editor;
use jotz::error::{JotzError, Result};
use jotz::session::EditState;
use std::io::{self, BufRead, Write};
use uuid::Uuid;

const HELP: &str = "\
Commands:
  /TERM             filter notes (bare / clears)
  s [TERM]          same as /TERM
  NUMBER            select the note at that position
  n                 new note in $EDITOR
  e [NUMBER]        edit the selected note (or the one at NUMBER)
  d [NUMBER]        delete the selected note (or the one at NUMBER)
  c                 discard the draft in progress
  ?                 this help
  q                 quit";

enum Flow {
    Continue,
    Quit,
}

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let term = Term::stdout();
    let attended = console::user_attended();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut status: Option<Notice> = None;

    loop {
        if attended {
            term.clear_screen().map_err(JotzError::Io)?;
        }
        render(ctx, status.take());

        print!("{} ", styles::PROMPT.apply_to("jotz>"));
        io::stdout().flush().map_err(JotzError::Io)?;

        let line = match lines.next() {
            Some(line) => line.map_err(JotzError::Io)?,
            // EOF ends the loop the same way `q` does
            None => break,
        };

        match dispatch(ctx, line.trim(), &mut lines, &mut status) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => status = Some(Notice::warning(e.to_string())),
        }
    }

    Ok(())
}

fn render(ctx: &AppContext, status: Option<Notice>) {
    let view = ctx.session.view();
    let total = ctx.session.notes().len();
    let filter = ctx.session.search().trim();

    let header = if filter.is_empty() {
        format!("jotz - {} notes", total)
    } else {
        format!("jotz - {} of {} notes", view.len(), total)
    };
    println!("{}", styles::HEADER.apply_to(header));
    if !filter.is_empty() {
        println!("{}", styles::FILTER.apply_to(format!("filter: {}", filter)));
    }
    if let Some(notice) = &status {
        print::print_notice(notice);
    }
    println!();

    print::note_list(&view.notes, view.selected);

    if let Some(note) = view.selected_note() {
        println!();
        println!("{}", styles::RULE.apply_to("─".repeat(40)));
        print::note_full(note);
    }

    match ctx.session.edit_state() {
        EditState::Idle => {}
        EditState::Creating(draft) => {
            let label = if draft.title.trim().is_empty() {
                "untitled".to_string()
            } else {
                format!("\"{}\"", draft.title.trim())
            };
            println!();
            println!(
                "{}",
                styles::DRAFT.apply_to(format!(
                    "Draft in progress: {} (n to continue, c to discard)",
                    label
                ))
            );
        }
        EditState::Editing(id, _) => {
            println!();
            println!(
                "{}",
                styles::DRAFT.apply_to(format!(
                    "Editing: \"{}\" (e to continue, c to discard)",
                    title_of(ctx, *id)
                ))
            );
        }
    }
    println!();
}

fn dispatch<R>(
    ctx: &mut AppContext,
    input: &str,
    lines: &mut R,
    status: &mut Option<Notice>,
) -> Result<Flow>
where
    R: Iterator<Item = io::Result<String>>,
{
    if input.is_empty() {
        return Ok(Flow::Continue);
    }

    // Bare numbers select
    if let Ok(position) = input.parse::<usize>() {
        select_note(ctx, position)?;
        return Ok(Flow::Continue);
    }

    if let Some(term) = input.strip_prefix('/') {
        ctx.session.set_search(term.trim());
        return Ok(Flow::Continue);
    }

    let (cmd, rest) = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    };

    match cmd {
        "q" | "quit" => return Ok(Flow::Quit),
        "s" | "search" => ctx.session.set_search(rest),
        "n" | "new" => create_note(ctx, status)?,
        "e" | "edit" => edit_note(ctx, rest, status)?,
        "d" | "del" | "delete" => delete_note(ctx, rest, lines, status)?,
        "c" | "cancel" => {
            ctx.session.cancel();
            *status = Some(Notice::info("Draft discarded."));
        }
        "?" | "help" => *status = Some(Notice::info(HELP)),
        other => {
            return Err(JotzError::Api(format!(
                "Unknown command: {} (? for help)",
                other
            )))
        }
    }

    Ok(Flow::Continue)
}

fn select_note(ctx: &mut AppContext, position: usize) -> Result<()> {
    let id = ctx
        .session
        .view()
        .nth(position)
        .map(|n| n.id)
        .ok_or_else(|| JotzError::Api(format!("No note at index {}", position)))?;
    ctx.session.select(id);
    Ok(())
}

fn create_note(ctx: &mut AppContext, status: &mut Option<Notice>) -> Result<()> {
    // A rejected save leaves the draft in flight; bare `n` resumes it
    if !matches!(ctx.session.edit_state(), EditState::Creating(_)) {
        ctx.session.begin_create();
    }
    let initial = ctx
        .session
        .edit_state()
        .draft()
        .cloned()
        .unwrap_or_default();

    let edited = editor::edit_draft(&initial)?;
    ctx.session.set_draft(edited)?;

    match ctx.session.save() {
        Ok(id) => {
            *status = Some(Notice::success(format!(
                "Note created: {}",
                title_of(ctx, id)
            )));
            Ok(())
        }
        Err(JotzError::EmptyTitle) => {
            *status = Some(Notice::warning(
                "Title cannot be empty. Draft kept (n to continue, c to discard)",
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn edit_note(ctx: &mut AppContext, rest: &str, status: &mut Option<Notice>) -> Result<()> {
    let id = match (rest.is_empty(), ctx.session.edit_state()) {
        // Bare `e` resumes an editing draft in flight
        (true, EditState::Editing(id, _)) => *id,
        _ => target_id(ctx, rest)?,
    };

    if !matches!(ctx.session.edit_state(), EditState::Editing(eid, _) if *eid == id) {
        ctx.session.begin_edit(id)?;
    }
    let initial = ctx
        .session
        .edit_state()
        .draft()
        .cloned()
        .unwrap_or_default();

    let edited = editor::edit_draft(&initial)?;
    ctx.session.set_draft(edited)?;

    match ctx.session.save() {
        Ok(id) => {
            *status = Some(Notice::success(format!(
                "Note updated: {}",
                title_of(ctx, id)
            )));
            Ok(())
        }
        Err(JotzError::EmptyTitle) => {
            *status = Some(Notice::warning(
                "Title cannot be empty. Draft kept (e to continue, c to discard)",
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn delete_note<R>(
    ctx: &mut AppContext,
    rest: &str,
    lines: &mut R,
    status: &mut Option<Notice>,
) -> Result<()>
where
    R: Iterator<Item = io::Result<String>>,
{
    let id = target_id(ctx, rest)?;
    let title = title_of(ctx, id);

    if !super::confirm_delete(lines, &title)? {
        *status = Some(Notice::info("Operation cancelled."));
        return Ok(());
    }

    let removed = ctx.session.delete(id)?;
    *status = Some(Notice::success(format!("Note deleted: {}", removed.title)));
    Ok(())
}

/// Resolves a command target: an explicit list position, or the current
/// selection when none was given.
fn target_id(ctx: &AppContext, rest: &str) -> Result<Uuid> {
    let view = ctx.session.view();
    if rest.is_empty() {
        return view
            .selected
            .ok_or_else(|| JotzError::Api("No note selected".to_string()));
    }

    let position: usize = rest
        .parse()
        .map_err(|_| JotzError::Api(format!("Invalid index: {}", rest)))?;
    view.nth(position)
        .map(|n| n.id)
        .ok_or_else(|| JotzError::Api(format!("No note at index {}", position)))
}

fn title_of(ctx: &AppContext, id: Uuid) -> String {
    ctx.session
        .get(id)
        .map(|n| n.title.clone())
        .unwrap_or_default()
}
