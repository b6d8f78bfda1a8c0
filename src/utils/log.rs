//! Status logging with colored module prefixes.
//!
//! Messages go to stderr so that command output on stdout stays pipeable.
//!
//! # Example
//!
//! ```ignore
//! log!("config"; "loaded {}", path.display());
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{IsTerminal, Write, stderr},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Total prefix length for a module name: `module.len() + 3`.
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Long messages are truncated to the terminal width.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    let width = get_terminal_width() as usize;

    let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
    let message = truncate_str(message, max_msg_len);

    let mut stderr = stderr().lock();
    let is_terminal = stderr.is_terminal();
    write_line(&mut stderr, is_terminal, &prefix, message).ok();
}

/// Write one log line. The line-clear escape is only sent to a terminal.
fn write_line(
    out: &mut impl Write,
    is_terminal: bool,
    prefix: &ColoredString,
    message: &str,
) -> std::io::Result<()> {
    if is_terminal {
        execute!(out, Clear(ClearType::UntilNewLine))?;
    }
    writeln!(out, "{prefix} {message}")?;
    out.flush()
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "config" => prefix.bright_blue().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within max_len bytes, on a char boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len() {
        // "config" -> "[config] " = 6 + 2 + 1
        assert_eq!(calc_prefix_len(6), 9);
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_fits() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "é" is 2 bytes; cutting at byte 2 would split it
        assert_eq!(truncate_str("Réseau", 2), "R");
        assert_eq!(truncate_str("Réseau", 3), "Ré");
    }

    #[test]
    fn test_colorize_prefix_keeps_text() {
        let prefix = colorize_prefix("Config", "config");
        assert!(prefix.to_string().contains("[Config]"));
    }

    #[test]
    fn test_write_line_not_terminal() {
        let prefix = colorize_prefix("config", "config");
        let mut out = Vec::new();
        write_line(&mut out, false, &prefix, "loaded seo.toml").unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(!line.contains("\x1b[K"));
        assert!(line.contains("[config]"));
        assert!(line.ends_with(" loaded seo.toml\n"));
    }

    #[test]
    fn test_write_line_terminal_clears() {
        let prefix = colorize_prefix("config", "config");
        let mut out = Vec::new();
        write_line(&mut out, true, &prefix, "loaded").unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("\x1b[K"));
        assert!(line.ends_with(" loaded\n"));
    }
}
