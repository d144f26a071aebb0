use crate::events::SessionEvent;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// The contract an agent session platform must offer an interrupt decider.
///
/// This abstraction keeps the decision logic independent of the platform
/// that actually runs speech recognition and synthesis (a room service, a
/// local pipeline, a scripted replay in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentSession: Send + Sync {
    /// Subscribes to the session's events.
    ///
    /// Every subscriber receives every event published after it subscribed,
    /// in publication order. The channel is unbounded: a subscriber that falls
    /// behind never loses events.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent>;

    /// Cuts off the agent's current speech output.
    ///
    /// The platform acknowledges a successful interruption with a later
    /// [`SessionEvent::AgentStoppedSpeaking`].
    async fn interrupt(&self) -> Result<()>;
}
