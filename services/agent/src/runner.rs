//! Runs one scripted session end to end.

use crate::{
    script::ScriptStep,
    session::{ScriptedSession, SessionSummary},
};
use anyhow::{Context, Result};
use std::{future::Future, sync::Arc};
use tracing::info;
use voice_interrupt_core::{FillerSet, InterruptDecider};

/// Attaches a decider to a fresh [`ScriptedSession`], replays `steps` and
/// waits for the decider to drain every published event.
///
/// If `shutdown` resolves first the replay stops early; the session is still
/// closed and its summary returned.
pub async fn run_session<F>(
    fillers: FillerSet,
    steps: &[ScriptStep],
    shutdown: F,
) -> Result<SessionSummary>
where
    F: Future<Output = ()>,
{
    let session = Arc::new(ScriptedSession::new());
    let decider = Arc::new(InterruptDecider::new(fillers));
    let decider_handle = decider
        .attach(&session)
        .context("Failed to attach interrupt decider")?;

    tokio::select! {
        _ = session.replay(steps) => {},
        _ = shutdown => {
            info!("Replay stopped early.");
        },
    }
    session.close();
    decider_handle
        .await
        .context("Interrupt decider task failed")?;

    Ok(session.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use std::time::Duration;

    const SCRIPT: &str = r#"
        {"event": "agent_started_speaking"}
        {"event": "user_input_transcribed", "text": "uh"}
        {"wait_ms": 100}
        {"event": "user_input_transcribed", "text": "no, wait"}
        {"wait_ms": 100}
        {"event": "user_input_transcribed", "text": "no, wait", "is_final": true}
    "#;

    #[tokio::test(start_paused = true)]
    async fn test_run_session_reports_summary() {
        let steps = parse_script(SCRIPT).unwrap();

        let summary = run_session(FillerSet::default(), &steps, std::future::pending())
            .await
            .unwrap();

        // Four scripted events, the stop acknowledgement and the close.
        assert_eq!(
            summary,
            SessionSummary {
                events_published: 6,
                interrupts: 1,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_replay_early() {
        let steps = parse_script(SCRIPT).unwrap();

        let summary = run_session(
            FillerSet::default(),
            &steps,
            tokio::time::sleep(Duration::from_millis(50)),
        )
        .await
        .unwrap();

        // Only the events before the first wait, plus the close.
        assert_eq!(
            summary,
            SessionSummary {
                events_published: 3,
                interrupts: 0,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_fillers_change_the_outcome() {
        let steps = parse_script(SCRIPT).unwrap();

        let summary = run_session(
            FillerSet::parse_list("uh,no,wait"),
            &steps,
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(summary.interrupts, 0);
    }
}
