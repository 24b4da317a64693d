//! This module provides the deferred-formatting buffer for request trace
//! lines.
//!
//! A `LogBuffer` collects human-readable trace lines while the owning
//! dispatcher processes one unit of work and renders them on demand once
//! the work completes. Nothing is printed here; the owner reads the
//! rendered lines and hands them to its display sink.
use crate::config::LogConfig;
use crate::entry::LogEntry;
use crate::format::{format_message, LogValue};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

/// Number of spaces prepended to indented lines.
const INDENT_WIDTH: usize = 4;

/// An append-only buffer of log entries with column-aligned titles.
///
/// The buffer lives as a field of a longer-lived owner, one per logical
/// session. The owner appends entries during a request, renders them with
/// [`LogBuffer::get_logs`] and discards them with
/// [`LogBuffer::clear_logs`] before the next request starts. Access is
/// exclusive through `&mut self`; owners processing overlapping requests
/// need one buffer per session.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    /// The recorded entries, in insertion order.
    entries: Vec<LogEntry>,
    /// Whether appends are currently recorded.
    enabled: bool,
    /// Whether appends are indented.
    indent_enabled: bool,
    /// Widest title seen since construction, in terminal columns.
    max_title_width: usize,
}

impl LogBuffer {
    /// Creates a new `LogBuffer`.
    ///
    /// # Arguments
    ///
    /// * `enabled` - The initial enabled state, typically taken from the
    ///   owner's verbosity configuration.
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: Vec::new(),
            enabled,
            indent_enabled: false,
            max_title_width: 0,
        }
    }

    /// Creates a `LogBuffer` from a configuration snapshot.
    pub fn from_config(config: &LogConfig) -> Self {
        let mut buffer = Self::new(config.enabled);
        buffer.indent_enabled = config.indent;
        buffer
    }

    /// Returns whether appends are currently recorded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables recording. Entries already recorded are kept.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        trace!(enabled, "log buffer recording toggled");
    }

    /// Enables or disables indentation for future appends.
    ///
    /// Indentation is applied when an entry is appended, so toggling this
    /// never rewrites entries already in the buffer.
    pub fn set_indent_enabled(&mut self, flag: bool) {
        self.indent_enabled = flag;
    }

    /// Appends a plain line. Does nothing while recording is disabled.
    ///
    /// With indentation enabled, every line of the message is prefixed
    /// with four spaces before it is stored.
    pub fn log(&mut self, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let message = if self.indent_enabled {
            indent_all_lines(message)
        } else {
            message.to_string()
        };

        self.entries.push(LogEntry::Plain(message));
    }

    /// Appends a titled entry. Does nothing while recording is disabled.
    ///
    /// The title must be a single line; a title containing line breaks
    /// breaks the column alignment. With indentation enabled only the
    /// title is indented, the message is stored verbatim even when it
    /// spans multiple lines.
    pub fn log_with_title(&mut self, title: &str, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let title = if self.indent_enabled {
            indent_single_line(title)
        } else {
            title.to_string()
        };

        // Always align against the widest title seen so far. Otherwise
        // the column moves around with each request.
        let width = title.width();
        if width > self.max_title_width {
            self.max_title_width = width;
        }

        self.entries.push(LogEntry::Titled {
            title,
            message: message.to_string(),
        });
    }

    /// Formats a template against loosely-typed arguments and appends the
    /// result as a plain line. Does nothing while recording is disabled.
    ///
    /// See [`format_message`] for the placeholder semantics.
    pub fn debug(&mut self, template: &str, args: &[LogValue]) {
        self.log(&format_message(template, args));
    }

    /// Discards every recorded entry.
    ///
    /// The title column width is kept, so entries recorded after a clear
    /// still align against the widest title ever seen.
    pub fn clear_logs(&mut self) {
        trace!(discarded = self.entries.len(), "clearing log buffer");
        self.entries.clear();
    }

    /// Returns whether any entry is currently recorded.
    pub fn has_logs(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Renders every recorded entry, in insertion order.
    ///
    /// Rendering never mutates the buffer; repeated calls without
    /// intervening appends or clears return identical output.
    pub fn get_logs(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| self.render_entry(entry))
            .collect()
    }

    fn render_entry(&self, entry: &LogEntry) -> String {
        match entry {
            LogEntry::Plain(text) => text.clone(),
            LogEntry::Titled { title, message } => {
                let label = format!("{}:", title);
                let padding = (self.max_title_width + 1).saturating_sub(label.width());
                format!("{}{} {}", label, " ".repeat(padding), message)
            }
        }
    }
}

fn indent_single_line(message: &str) -> String {
    format!("{}{}", " ".repeat(INDENT_WIDTH), message)
}

fn indent_all_lines(message: &str) -> String {
    message
        .split('\n')
        .map(indent_single_line)
        .collect::<Vec<_>>()
        .join("\n")
}
