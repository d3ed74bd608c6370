//! Terminal rendering of Markdown output
//!
//! Uses termimad for inline styling, with a plain-text mode for `--no-color`
//! and non-interactive use. Subtask checkboxes (`- [x]`, `- [ ]`) are drawn
//! as colored marks so finished work stands out in a task view.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Header lines keep their `#` markers and are printed in blue. Done
    /// subtasks get a green check and a dimmed name, open ones an empty box.
    /// Every other line goes through termimad's inline renderer.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else if let Some((done, rest)) = checkbox(line) {
                    if done {
                        println!("\x1b[32m✔\x1b[0m \x1b[2m{rest}\x1b[0m");
                    } else {
                        print!("☐ ");
                        self.skin.print_inline(rest);
                        println!();
                    }
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

/// Splits a subtask line into its done flag and the text after the box.
fn checkbox(line: &str) -> Option<(bool, &str)> {
    if let Some(rest) = line.strip_prefix("- [x] ") {
        Some((true, rest))
    } else {
        line.strip_prefix("- [ ] ").map(|rest| (false, rest))
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Tasks\n\nNo tasks found.\n").is_ok());
    }

    #[test]
    fn test_checkbox_lines() {
        assert_eq!(
            checkbox("- [x] 1. Research (2h, High)"),
            Some((true, "1. Research (2h, High)"))
        );
        assert_eq!(checkbox("- [ ] 2. Setup (1h, High)"), Some((false, "2. Setup (1h, High)")));
        assert_eq!(checkbox("- **day1**: 1, 2"), None);
        assert_eq!(checkbox("- Progress: 1/5"), None);
    }

    #[test]
    fn test_rich_renderer_handles_task_view() {
        let renderer = TerminalRenderer::new(true);
        let markdown = "# 1. Ship\n\n## Subtasks\n\n- [x] 1. Plan (2h, High)\n- [ ] 2. Build (3h, High)\n";
        assert!(renderer.render(markdown).is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
