//! Tracks whether the agent is currently producing speech.
//!
//! The state lives behind an async mutex and is only reachable through the
//! accessors below. Callers that must decide based on the state (and act
//! before it can change) take a [`SpeakingGuard`] and hold it for the whole
//! check-and-act sequence.

use tokio::sync::{Mutex, MutexGuard};

/// The agent's speech output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentSpeech {
    #[default]
    Quiet,
    Speaking,
}

impl AgentSpeech {
    pub fn is_speaking(self) -> bool {
        self == Self::Speaking
    }
}

/// Lock-guarded holder of the agent's [`AgentSpeech`] state.
///
/// Starts out [`AgentSpeech::Quiet`]. Concurrent updates are applied in the
/// order they acquire the lock; the last writer wins.
#[derive(Debug, Default)]
pub struct SpeakingState {
    inner: Mutex<AgentSpeech>,
}

impl SpeakingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the agent as speaking and returns the previous state.
    pub async fn start_speaking(&self) -> AgentSpeech {
        self.set(AgentSpeech::Speaking).await
    }

    /// Marks the agent as quiet and returns the previous state.
    pub async fn stop_speaking(&self) -> AgentSpeech {
        self.set(AgentSpeech::Quiet).await
    }

    /// A snapshot of the current state. It may be stale as soon as it returns.
    pub async fn current(&self) -> AgentSpeech {
        *self.inner.lock().await
    }

    /// Takes exclusive, read-only access to the state.
    ///
    /// No transition can happen until the guard is dropped.
    pub async fn lock(&self) -> SpeakingGuard<'_> {
        SpeakingGuard(self.inner.lock().await)
    }

    async fn set(&self, next: AgentSpeech) -> AgentSpeech {
        let mut state = self.inner.lock().await;
        std::mem::replace(&mut *state, next)
    }
}

/// Exclusive, read-only view of a [`SpeakingState`].
pub struct SpeakingGuard<'a>(MutexGuard<'a, AgentSpeech>);

impl SpeakingGuard<'_> {
    pub fn state(&self) -> AgentSpeech {
        *self.0
    }

    pub fn is_speaking(&self) -> bool {
        self.0.is_speaking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_starts_quiet() {
        let state = SpeakingState::new();
        assert_eq!(state.current().await, AgentSpeech::Quiet);
    }

    #[tokio::test]
    async fn test_start_then_stop_round_trips() {
        let state = SpeakingState::new();
        assert_eq!(state.start_speaking().await, AgentSpeech::Quiet);
        assert!(state.current().await.is_speaking());
        assert_eq!(state.stop_speaking().await, AgentSpeech::Speaking);
        assert_eq!(state.current().await, AgentSpeech::Quiet);
    }

    #[tokio::test]
    async fn test_repeated_events_are_idempotent() {
        let state = SpeakingState::new();
        state.start_speaking().await;
        assert_eq!(state.start_speaking().await, AgentSpeech::Speaking);
        state.stop_speaking().await;
        assert_eq!(state.stop_speaking().await, AgentSpeech::Quiet);
    }

    #[tokio::test]
    async fn test_guard_blocks_transitions_until_dropped() {
        let state = Arc::new(SpeakingState::new());
        let guard = state.lock().await;

        let writer = {
            let state = state.clone();
            tokio::spawn(async move { state.start_speaking().await })
        };
        tokio::task::yield_now().await;
        assert!(!writer.is_finished());
        assert!(!guard.is_speaking());

        drop(guard);
        assert_eq!(writer.await.unwrap(), AgentSpeech::Quiet);
        assert_eq!(state.lock().await.state(), AgentSpeech::Speaking);
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let state = Arc::new(SpeakingState::new());
        let guard = state.lock().await;

        let first = {
            let state = state.clone();
            tokio::spawn(async move { state.start_speaking().await })
        };
        tokio::task::yield_now().await;
        let second = {
            let state = state.clone();
            tokio::spawn(async move { state.stop_speaking().await })
        };
        tokio::task::yield_now().await;

        drop(guard);
        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(state.current().await, AgentSpeech::Quiet);
    }
}
