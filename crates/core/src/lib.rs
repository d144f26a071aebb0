//! Voice Interrupt Core
//!
//! Decides whether a user's speech should cut off a voice agent that is
//! currently talking. The crate is platform-agnostic: a session platform
//! implements [`session::AgentSession`] and the [`decider::InterruptDecider`]
//! subscribes to it.

pub mod decider;
pub mod events;
pub mod filler;
pub mod session;
pub mod speaking;

pub use decider::{Decision, DeciderError, InterruptDecider};
pub use events::{SessionEvent, Transcript};
pub use filler::FillerSet;
pub use session::AgentSession;
