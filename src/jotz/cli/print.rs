use chrono::{DateTime, Utc};
use colored::Colorize;
use jotz::model::Note;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const SELECTED_MARKER: &str = "›";

/// A status line, printable immediately (one-shot commands) or deferred to
/// the next render (browse screen).
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            content: content.into(),
        }
    }
}

pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => println!("{}", notice.content.dimmed()),
        NoticeLevel::Success => println!("{}", notice.content.green()),
        NoticeLevel::Warning => println!("{}", notice.content.yellow()),
    }
}

pub fn info(msg: &str) {
    print_notice(&Notice::info(msg));
}

pub fn success(msg: &str) {
    print_notice(&Notice::success(msg));
}

/// One line per note: position, title, a flattened content preview, and the
/// time since the last change in a right-aligned column. The selected note
/// (if any) carries a marker and its line is highlighted.
pub fn note_list(notes: &[Note], selected: Option<Uuid>) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let is_selected = selected == Some(note.id);

        let left_prefix = if is_selected {
            format!("  {} ", SELECTED_MARKER)
        } else {
            "    ".to_string()
        };
        let left_prefix_width = left_prefix.width();

        let time_ago = format_time_ago(note.updated);

        let content_preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if content_preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, content_preview)
        };

        let idx_width = idx_str.width();
        let fixed_width = left_prefix_width + idx_width + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let idx_colored = if is_selected {
            idx_str.cyan()
        } else {
            idx_str.normal()
        };
        let title_colored = if is_selected {
            title_display.cyan()
        } else {
            title_display.normal()
        };

        println!(
            "{}{}{}{}  {}",
            left_prefix,
            idx_colored,
            title_colored,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

/// The full note: title, separator, content, and a last-change stamp.
pub fn note_full(note: &Note) {
    println!("{}", note.title.bold());
    println!("--------------------------------");
    if !note.content.is_empty() {
        println!("{}", note.content);
    }
    println!();
    println!("{}", format!("Updated {}", time_ago(note.updated)).dimmed());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    // Singular units get a second space so the column lines up with plurals
    let time_str = time_ago(timestamp)
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
