use console::Style;
use once_cell::sync::Lazy;

/// Styles for the interactive browse screen. The one-shot commands use
/// `colored` directly; these cover the parts only browse renders.
pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static FILTER: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static RULE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static DRAFT: Lazy<Style> = Lazy::new(|| Style::new().magenta());
