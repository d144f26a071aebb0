//! An in-process agent session that replays a script of platform events.

use crate::script::ScriptStep;
use anyhow::Result;
use async_trait::async_trait;
use std::{
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, info};
use voice_interrupt_core::{AgentSession, SessionEvent};

/// Counters describing what happened during a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub events_published: usize,
    pub interrupts: usize,
}

/// A session whose events come from a script instead of a live room.
///
/// Like a real platform, it acknowledges a successful [`interrupt`] by
/// publishing [`SessionEvent::AgentStoppedSpeaking`].
///
/// [`interrupt`]: AgentSession::interrupt
#[derive(Default)]
pub struct ScriptedSession {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<SessionEvent>>>,
    agent_speaking: AtomicBool,
    events_published: AtomicUsize,
    interrupts: AtomicUsize,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `event` to every live subscriber.
    ///
    /// Subscribers never miss events, however far behind they fall.
    pub fn publish(&self, event: SessionEvent) {
        match &event {
            SessionEvent::AgentStartedSpeaking => self.agent_speaking.store(true, Ordering::SeqCst),
            SessionEvent::AgentStoppedSpeaking => {
                self.agent_speaking.store(false, Ordering::SeqCst)
            }
            _ => {}
        }
        debug!(event = event.name(), "Publishing session event.");
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        if subscribers.is_empty() {
            debug!("No subscribers; event dropped.");
        }
        drop(subscribers);
        self.events_published.fetch_add(1, Ordering::SeqCst);
    }

    /// Replays `steps` in order, sleeping for every wait step.
    pub async fn replay(&self, steps: &[ScriptStep]) {
        for step in steps {
            match step {
                ScriptStep::Wait { wait_ms } => {
                    tokio::time::sleep(Duration::from_millis(*wait_ms)).await;
                }
                ScriptStep::Event(event) => self.publish(event.clone()),
            }
        }
        info!(steps = steps.len(), "Script replay finished.");
    }

    /// Ends the session for all subscribers.
    pub fn close(&self) {
        self.publish(SessionEvent::Closed);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            events_published: self.events_published.load(Ordering::SeqCst),
            interrupts: self.interrupts.load(Ordering::SeqCst),
        }
    }
}

#[async_trait]
impl AgentSession for ScriptedSession {
    fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    async fn interrupt(&self) -> Result<()> {
        self.interrupts.fetch_add(1, Ordering::SeqCst);
        if self.agent_speaking.load(Ordering::SeqCst) {
            info!("Agent speech interrupted.");
            self.publish(SessionEvent::AgentStoppedSpeaking);
        } else {
            debug!("Interrupt requested while the agent was already quiet.");
        }
        Ok(())
    }
}
