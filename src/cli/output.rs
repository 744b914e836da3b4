//! Labelled, colour-coded terminal output.

use std::fmt;

use colored::Colorize;

/// Categories of shell output; each carries a text label so transcripts
/// stay readable when colour is stripped.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Info => "INFO: [i]",
            MessageKind::Success => "SUCCESS: [+]",
            MessageKind::Warning => "WARNING: [!]",
            MessageKind::Error => "ERROR: [x]",
            MessageKind::Hint => "HINT: >",
            MessageKind::Section => "",
        }
    }

    fn paint(self, line: String) -> String {
        match self {
            MessageKind::Info => line,
            MessageKind::Success => line.bright_green().to_string(),
            MessageKind::Warning => line.bright_yellow().to_string(),
            MessageKind::Error => line.bright_red().to_string(),
            MessageKind::Hint => line.bright_cyan().to_string(),
            MessageKind::Section => line.bold().to_string(),
        }
    }
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    let line = match kind {
        MessageKind::Section => format!("\n=== {} ===", message.to_string().trim()),
        _ => format!("{} {}", kind.tag(), message),
    };
    println!("{}", kind.paint(line));
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    emit(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    emit(MessageKind::Section, title);
}
