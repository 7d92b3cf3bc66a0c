//! The screening session record.
//!
//! One mutable record per process run: candidate profile, generated
//! questions, the ordered answer transcript, and the rolling chat history
//! forwarded to the LLM.

use crate::candidate::{CandidateProfile, Field};
use crate::ollama::OllamaMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Only this many history messages are kept in memory.
const HISTORY_CAP: usize = 30;

/// Only the most recent slice of history is forwarded as LLM context.
const CONTEXT_WINDOW: usize = 10;

/// Where the conversation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Greeting,
    CollectingInfo,
    TechnicalQuestions,
    Complete,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::Greeting => "greeting",
            Step::CollectingInfo => "collecting info",
            Step::TechnicalQuestions => "technical questions",
            Step::Complete => "complete",
        }
    }
}

/// One asked question and the accepted answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// The single mutable session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session id, generated at conversation start.
    pub id: Uuid,

    /// Conversation start time (UTC).
    pub started_at: DateTime<Utc>,

    /// Current conversation step.
    pub step: Step,

    /// Intake field currently awaited, while collecting info.
    pub awaiting_field: Option<Field>,

    /// Candidate information collected so far.
    pub profile: CandidateProfile,

    /// Generated technical questions, in asking order.
    pub questions: Vec<String>,

    /// Index of the question currently awaiting an answer.
    pub question_index: usize,

    /// Ordered question/answer transcript.
    pub transcript: Vec<QaPair>,

    /// Rolling chat history, capped at the most recent 30 messages.
    #[serde(default)]
    pub history: Vec<OllamaMessage>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            step: Step::Greeting,
            awaiting_field: None,
            profile: CandidateProfile::new(),
            questions: Vec::new(),
            question_index: 0,
            transcript: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == Step::Complete
    }

    /// The question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.question_index).map(String::as_str)
    }

    /// Record an accepted answer and advance to the next question.
    ///
    /// Returns the next question, or None once all have been answered.
    pub fn record_answer(&mut self, answer: String) -> Option<&str> {
        if let Some(question) = self.questions.get(self.question_index) {
            self.transcript.push(QaPair {
                question: question.clone(),
                answer,
            });
            self.question_index += 1;
        }
        self.current_question()
    }

    /// Append a message to the rolling history, enforcing the cap.
    pub fn push_history(&mut self, role: &str, content: &str) {
        self.history.push(OllamaMessage {
            role: role.to_string(),
            content: content.to_string(),
        });
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
    }

    /// The most recent history slice forwarded as LLM context.
    pub fn context_window(&self) -> &[OllamaMessage] {
        let start = self.history.len().saturating_sub(CONTEXT_WINDOW);
        &self.history[start..]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_greeting() {
        let session = Session::new();
        assert_eq!(session.step, Step::Greeting);
        assert!(session.transcript.is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_record_answer_advances_transcript() {
        let mut session = Session::new();
        session.questions = vec!["Q1?".to_string(), "Q2?".to_string()];

        let next = session.record_answer("first answer".to_string());
        assert_eq!(next, Some("Q2?"));
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript[0].question, "Q1?");

        let next = session.record_answer("second answer".to_string());
        assert_eq!(next, None);
        assert_eq!(session.transcript.len(), 2);
    }

    #[test]
    fn test_history_capped_at_thirty() {
        let mut session = Session::new();
        for i in 0..40 {
            session.push_history("user", &format!("message {i}"));
        }
        assert_eq!(session.history.len(), 30);
        assert_eq!(session.history[0].content, "message 10");
    }

    #[test]
    fn test_context_window_takes_last_ten() {
        let mut session = Session::new();
        for i in 0..15 {
            session.push_history("user", &format!("message {i}"));
        }
        let window = session.context_window();
        assert_eq!(window.len(), 10);
        assert_eq!(window[0].content, "message 5");
    }

    #[test]
    fn test_context_window_with_short_history() {
        let mut session = Session::new();
        session.push_history("user", "hello");
        assert_eq!(session.context_window().len(), 1);
    }
}
