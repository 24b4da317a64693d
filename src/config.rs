//! This module defines the owner-facing configuration for the buffer.
use serde::{Deserialize, Serialize};

/// Configuration snapshot the owning dispatcher derives from its
/// verbosity options, embeddable in the owner's own config file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct LogConfig {
    /// Whether entries are recorded at all.
    #[serde(default)]
    pub enabled: bool,
    /// Whether appended lines are indented.
    #[serde(default)]
    pub indent: bool,
}
