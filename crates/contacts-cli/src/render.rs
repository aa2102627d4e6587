//! Terminal rendering of contact view blocks

use colored::Colorize;
use contacts::{ContactView, DisplayName, ViewBlock};

/// Render view blocks as terminal lines
pub fn render_lines(view: &ContactView) -> Vec<String> {
    let mut heading = match view.display_name() {
        Some(DisplayName::Named(text)) => text.bold().to_string(),
        Some(name @ DisplayName::NoName) => name.to_string().italic().to_string(),
        None => String::new(),
    };
    let mut lines = Vec::new();

    for block in &view.blocks {
        match block {
            ViewBlock::Avatar { src, .. } => {
                if let Some(src) = src.as_deref().filter(|s| !s.is_empty()) {
                    lines.push(format!("  {} {}", "avatar".dimmed(), src.dimmed()));
                }
            }
            ViewBlock::Name { .. } => {}
            ViewBlock::Favourite { button } => {
                heading = format!("{} {}", heading, button.glyph.yellow());
            }
            ViewBlock::Handle { text, href } => {
                lines.push(format!("  {} ({})", text.cyan(), href.dimmed()));
            }
            ViewBlock::Notes { text } => {
                lines.push(format!("  {}", text));
            }
            ViewBlock::Actions { .. } => {}
        }
    }

    lines.insert(0, heading);
    lines
}
