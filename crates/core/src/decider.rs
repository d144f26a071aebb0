//! Interrupt Decider
//!
//! This module decides, for every user transcript that arrives while the agent
//! is talking, whether the user is genuinely trying to cut in or is only
//! producing filler ("uh", "umm"). Genuine interruptions stop the agent via
//! [`AgentSession::interrupt`]; filler is ignored so the agent keeps talking.
//!
//! Interim transcripts are acted upon as soon as they arrive; the decider does
//! not wait for the speech-to-text engine to finalize an utterance.

use crate::{
    events::{SessionEvent, Transcript},
    filler::FillerSet,
    session::AgentSession,
    speaking::SpeakingState,
};
use std::sync::{Arc, OnceLock, Weak};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{Instrument, debug, info, warn};

/// Errors raised while wiring a decider to a session.
#[derive(Debug, thiserror::Error)]
pub enum DeciderError {
    #[error("Interrupt decider is already bound to a session")]
    AlreadyBound,
}

/// The outcome of handling one transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No live session is bound, so nothing could be interrupted.
    Detached,
    /// The agent was quiet; the platform's own turn-taking handles the input.
    AgentQuiet,
    /// The agent was speaking but the transcript held only filler.
    NotGenuine,
    /// The agent was speaking and the transcript held a real word, so the
    /// session was asked to interrupt.
    Interrupted,
}

/// Decides whether user speech should interrupt the agent.
///
/// One decider serves one session. It holds only a weak reference to that
/// session and never keeps it alive; once the session is gone every transcript
/// yields [`Decision::Detached`].
pub struct InterruptDecider {
    fillers: FillerSet,
    speaking: SpeakingState,
    session: OnceLock<Weak<dyn AgentSession>>,
}

impl InterruptDecider {
    /// Creates an unbound decider that starts with the agent quiet.
    pub fn new(fillers: FillerSet) -> Self {
        Self {
            fillers,
            speaking: SpeakingState::new(),
            session: OnceLock::new(),
        }
    }

    pub fn fillers(&self) -> &FillerSet {
        &self.fillers
    }

    /// The lock-guarded speaking state this decider consults.
    pub fn speaking_state(&self) -> &SpeakingState {
        &self.speaking
    }

    /// Returns `true` while the bound session is still alive.
    pub fn is_attached(&self) -> bool {
        self.live_session().is_some()
    }

    /// Records `session` as the target of future interruptions without
    /// subscribing to its events.
    ///
    /// Use this when events are delivered to the handlers by some other means.
    pub fn bind<S>(&self, session: &Arc<S>) -> Result<(), DeciderError>
    where
        S: AgentSession + 'static,
    {
        let session = Arc::downgrade(session);
        let session: Weak<dyn AgentSession> = session;
        self.session
            .set(session)
            .map_err(|_| DeciderError::AlreadyBound)
    }

    /// Binds to `session`, subscribes to its events and spawns a task that
    /// feeds them to the handlers in delivery order.
    ///
    /// The task ends when the session publishes [`SessionEvent::Closed`] or
    /// its event channel closes.
    pub fn attach<S>(self: &Arc<Self>, session: &Arc<S>) -> Result<JoinHandle<()>, DeciderError>
    where
        S: AgentSession + 'static,
    {
        self.bind(session)?;
        let events = session.subscribe();
        let decider = Arc::clone(self);
        let span = tracing::info_span!("interrupt_decider", fillers = %self.fillers);
        Ok(tokio::spawn(
            async move { decider.run_event_loop(events).await }.instrument(span),
        ))
    }

    async fn run_event_loop(&self, mut events: mpsc::UnboundedReceiver<SessionEvent>) {
        loop {
            match events.recv().await {
                Some(SessionEvent::Closed) => {
                    info!("Session closed.");
                    break;
                }
                Some(event) => {
                    self.handle_event(&event).await;
                }
                None => {
                    info!("Session event channel closed.");
                    break;
                }
            }
        }
        info!("Interrupt decider detached.");
    }

    /// Routes one session event to its handler.
    ///
    /// Returns the decision for transcript events and `None` otherwise.
    pub async fn handle_event(&self, event: &SessionEvent) -> Option<Decision> {
        match event {
            SessionEvent::AgentStartedSpeaking => {
                self.on_agent_started_speaking().await;
                None
            }
            SessionEvent::AgentStoppedSpeaking => {
                self.on_agent_stopped_speaking().await;
                None
            }
            SessionEvent::UserInputTranscribed(transcript) => {
                Some(self.on_user_input_transcribed(transcript).await)
            }
            SessionEvent::Closed => None,
        }
    }

    pub async fn on_agent_started_speaking(&self) {
        self.speaking.start_speaking().await;
        debug!("Agent started speaking.");
    }

    pub async fn on_agent_stopped_speaking(&self) {
        self.speaking.stop_speaking().await;
        debug!("Agent stopped speaking.");
    }

    /// Decides what to do with a user transcript.
    ///
    /// The speaking state is held locked from the check until the interrupt
    /// request has returned, so no speaking transition can slip in between
    /// the decision and the action it triggers.
    pub async fn on_user_input_transcribed(&self, transcript: &Transcript) -> Decision {
        let Some(session) = self.live_session() else {
            return Decision::Detached;
        };

        let speaking = self.speaking.lock().await;
        if !speaking.is_speaking() {
            debug!(
                transcript = %transcript.text,
                is_final = transcript.is_final,
                "Ignoring transcript, agent quiet."
            );
            return Decision::AgentQuiet;
        }

        if !self.fillers.is_genuine_interruption(&transcript.text) {
            info!(
                transcript = %transcript.text,
                is_final = transcript.is_final,
                "Ignoring filler interruption."
            );
            return Decision::NotGenuine;
        }

        info!(
            transcript = %transcript.text,
            is_final = transcript.is_final,
            "Genuine interruption detected, stopping agent."
        );
        if let Err(e) = session.interrupt().await {
            warn!(error = ?e, "Session failed to interrupt the agent.");
        }
        drop(speaking);
        Decision::Interrupted
    }

    fn live_session(&self) -> Option<Arc<dyn AgentSession>> {
        self.session.get().and_then(Weak::upgrade)
    }
}
