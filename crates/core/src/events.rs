use serde::{Deserialize, Serialize};

/// A (possibly partial) transcription of the user's speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// The raw recognised text, as delivered by the speech-to-text engine.
    pub text: String,
    /// `false` for interim results that may still be revised.
    #[serde(default)]
    pub is_final: bool,
}

impl Transcript {
    /// An interim (not yet finalized) transcript.
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// A finalized transcript.
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Events an agent session emits to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The agent began producing speech output.
    AgentStartedSpeaking,
    /// The agent finished (or was cut off from) producing speech output.
    AgentStoppedSpeaking,
    /// A transcription of the user's speech arrived.
    UserInputTranscribed(Transcript),
    /// The session ended; no further events follow.
    Closed,
}

impl SessionEvent {
    /// The platform name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AgentStartedSpeaking => "agent_started_speaking",
            Self::AgentStoppedSpeaking => "agent_stopped_speaking",
            Self::UserInputTranscribed(_) => "user_input_transcribed",
            Self::Closed => "closed",
        }
    }
}
