//! Terminal output rendering
//!
//! Formats output lines, the prompt, and control sequences for a
//! line-oriented terminal.

use crate::protocol::{LineKind, OutputLine};

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const PROMPT_USER: &str = "root@mi5";

const RESET: &str = "\x1b[0m";

pub const GREETING: &str = "MI5 SECURE TERMINAL // CLEARANCE: ROOT\nType 'cat readme.txt' to read your mission or 'help' for commands.";

pub const HELP: &str = "COMMANDS:\n- ls (list files)\n- cd [dir] (change directory)\n- cat [file] (read file)\n- mv [file] [path] (move file)\n- pwd (print working directory)\n- clear (clear screen)\n- exit (close session)";

fn color_code(kind: LineKind) -> Option<&'static str> {
    match kind {
        LineKind::Error => Some("\x1b[31m"),
        LineKind::Success => Some("\x1b[32m"),
        LineKind::Info => Some("\x1b[33m"),
        LineKind::Data => None,
    }
}

/// Formats an output line, expanding embedded newlines to CRLF.
pub fn render_line(line: &OutputLine, color: bool) -> String {
    let text = line.text.replace('\n', "\r\n");
    match color_code(line.kind).filter(|_| color) {
        Some(code) => format!("{}{}{}\r\n", code, text, RESET),
        None => format!("{}\r\n", text),
    }
}

/// Formats a batch of output lines.
pub fn render_lines(lines: &[OutputLine], color: bool) -> String {
    lines.iter().map(|line| render_line(line, color)).collect()
}

/// Formats the shell prompt for the given working directory.
pub fn format_prompt(current_path: &str, color: bool) -> String {
    if color {
        format!("\x1b[32m{}\x1b[0m:\x1b[34m{}\x1b[0m$ ", PROMPT_USER, current_path)
    } else {
        format!("{}:{}$ ", PROMPT_USER, current_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let line = OutputLine::error("cat: x: No such file");
        assert_eq!(render_line(&line, false), "cat: x: No such file\r\n");
    }

    #[test]
    fn test_render_colored() {
        assert_eq!(
            render_line(&OutputLine::success("Moved"), true),
            "\x1b[32mMoved\x1b[0m\r\n"
        );
        assert_eq!(render_line(&OutputLine::data("plain"), true), "plain\r\n");
    }

    #[test]
    fn test_render_expands_newlines() {
        let line = OutputLine::data("a\nb");
        assert_eq!(render_line(&line, false), "a\r\nb\r\n");
    }

    #[test]
    fn test_render_lines_and_prompt() {
        let lines = vec![OutputLine::info(""), OutputLine::success("done")];
        assert_eq!(render_lines(&lines, false), "\r\ndone\r\n");
        assert_eq!(format_prompt("/intercepts", false), "root@mi5:/intercepts$ ");
        assert!(format_prompt("/", true).ends_with("$ "));
    }
}
