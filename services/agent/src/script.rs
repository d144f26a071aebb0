//! Defines the JSON-lines script format replayed by a [`ScriptedSession`].
//!
//! Each non-blank line that does not start with `#` is one step:
//!
//! ```text
//! {"event": "agent_started_speaking"}
//! {"wait_ms": 150}
//! {"event": "user_input_transcribed", "text": "umm okay stop", "is_final": false}
//! {"event": "agent_stopped_speaking"}
//! ```
//!
//! [`ScriptedSession`]: crate::session::ScriptedSession

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{io::Read, path::Path, time::Duration};
use voice_interrupt_core::SessionEvent;

/// One step of a script.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Pauses the replay.
    Wait { wait_ms: u64 },
    /// Publishes an event as if the platform had fired it.
    Event(SessionEvent),
}

impl ScriptStep {
    /// A pause of `duration`, saturating at `u64::MAX` milliseconds.
    pub fn wait(duration: Duration) -> Self {
        Self::Wait {
            wait_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Errors raised while parsing a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Invalid script step on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a whole script.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, step)| {
            serde_json::from_str(step).map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}

/// Reads and parses a script from `path`, or from stdin when `path` is `-`.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?
    };
    Ok(parse_script(&text)?)
}
