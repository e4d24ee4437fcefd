//! One-line console messages printed around a progress display.

use console::style;

/// Whether `NO_COLOR` asks for plain output.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Done,
    Failed,
}

/// Format a message, styling the tag unless `plain`.
#[must_use]
pub fn format_message(tone: Tone, text: &str, plain: bool) -> String {
    match (tone, plain) {
        (Tone::Title, true) => format!("== {text} =="),
        (Tone::Title, false) => style(format!("== {text} ==")).bold().to_string(),
        (Tone::Done, true) => format!("[done] {text}"),
        (Tone::Done, false) => format!("{} {text}", style("[done]").green().bold()),
        (Tone::Failed, true) => format!("[failed] {text}"),
        (Tone::Failed, false) => format!("{} {text}", style("[failed]").red().bold()),
    }
}

/// Print a title line to stdout.
pub fn print_title(text: &str) {
    println!("{}", format_message(Tone::Title, text, is_color_disabled()));
}

/// Print a completion line to stdout.
pub fn print_done(text: &str) {
    println!("{}", format_message(Tone::Done, text, is_color_disabled()));
}

/// Print a failure line to stderr.
pub fn print_failed(text: &str) {
    eprintln!("{}", format_message(Tone::Failed, text, is_color_disabled()));
}
