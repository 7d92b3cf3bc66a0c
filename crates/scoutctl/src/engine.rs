//! Interview engine - the screening state machine.
//!
//! Drives the conversation: greeting, field collection with validation,
//! question generation, the technical phase, and completion. Every reply
//! path has a deterministic rule-based fallback so the conversation keeps
//! working when Ollama is unreachable.

use crate::llm_client::LlmClient;
use crate::prompts;
use scout_common::questions::{fallback_questions, parse_questions};
use scout_common::tech_stack::recognized_technologies;
use scout_common::validate::validate_field;
use scout_common::{ChatOptions, Field, OllamaMessage, Session, Step, QUESTION_COUNT};
use tracing::{debug, warn};

/// Words that end the conversation from any step.
const EXIT_WORDS: [&str; 6] = ["bye", "exit", "quit", "goodbye", "stop", "end"];

/// Technical answers shorter than this many words get an elaboration prompt.
const MIN_ANSWER_WORDS: usize = 5;

/// One engine turn: what to print, and whether the conversation is over.
#[derive(Debug, Clone)]
pub struct EngineReply {
    pub text: String,
    pub done: bool,
}

impl EngineReply {
    fn say(text: String) -> Self {
        Self { text, done: false }
    }

    fn farewell(text: String) -> Self {
        Self { text, done: true }
    }
}

/// The screening state machine.
///
/// `llm` is None when Ollama was unreachable at startup; individual call
/// failures also degrade to the rule-based replies.
pub struct InterviewEngine {
    session: Session,
    llm: Option<LlmClient>,
}

impl InterviewEngine {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self {
            session: Session::new(),
            llm,
        }
    }

    /// Rule-based engine with no LLM at all.
    pub fn offline() -> Self {
        Self::new(None)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn llm_available(&self) -> bool {
        self.llm.is_some()
    }

    /// Static greeting shown before the first user turn.
    pub fn greeting(&self) -> String {
        prompts::greeting()
    }

    /// Start a fresh session, keeping the LLM connection.
    pub fn reset(&mut self) {
        self.session = Session::new();
        debug!("session reset");
    }

    /// Process one user message and produce the next reply.
    pub async fn process_message(&mut self, input: &str) -> EngineReply {
        let input = input.trim();
        self.session.push_history("user", input);

        let reply = if is_exit_command(input) {
            self.handle_exit().await
        } else {
            match self.session.step {
                Step::Greeting => self.handle_greeting().await,
                Step::CollectingInfo => self.handle_collection(input).await,
                Step::TechnicalQuestions => self.handle_technical(input).await,
                Step::Complete => self.handle_post_completion(input).await,
            }
        };

        self.session.push_history("assistant", &reply.text);
        reply
    }

    async fn handle_exit(&mut self) -> EngineReply {
        let collected = self.session.profile.collected_fields().len();
        let answered = self.session.transcript.len();
        let fallback = "Thank you for your time! Feel free to come back and \
                        finish the screening whenever suits you. Goodbye!"
            .to_string();

        let text = self
            .llm_reply(&prompts::exit_instruction(collected, answered), fallback)
            .await;
        EngineReply::farewell(text)
    }

    async fn handle_greeting(&mut self) -> EngineReply {
        let first = Field::ORDER[0];
        self.session.step = Step::CollectingInfo;
        self.session.awaiting_field = Some(first);

        let fallback = format!("Great! To begin, could you share your {}?", first.label());
        let text = self
            .llm_reply(&prompts::transition_instruction(first), fallback)
            .await;
        EngineReply::say(text)
    }

    async fn handle_collection(&mut self, input: &str) -> EngineReply {
        let Some(field) = self.session.awaiting_field else {
            // Collection step without a pending field is a bug; recover by
            // restarting the field walk.
            warn!("collection step with no awaiting field");
            self.session.awaiting_field = Some(Field::ORDER[0]);
            return EngineReply::say(self.reprompt_text());
        };

        if is_off_topic(input) {
            let pending = field.label().to_string();
            let fallback = format!(
                "Good question! Let's keep the screening moving though - could \
                 you share your {pending}?"
            );
            let text = self
                .llm_reply(&prompts::off_topic_instruction(input, &pending), fallback)
                .await;
            return EngineReply::say(text);
        }

        let value = match validate_field(field, input) {
            Ok(value) => value,
            Err(err) => {
                let reason = match &err {
                    scout_common::ScoutError::Validation { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                let fallback = format!(
                    "Hmm, {reason}. Could you give me your {} again?",
                    field.label()
                );
                let text = self
                    .llm_reply(
                        &prompts::invalid_field_instruction(field, input, &reason),
                        fallback,
                    )
                    .await;
                return EngineReply::say(text);
            }
        };

        self.session.profile.set(field, value.clone());
        debug!(field = field.label(), "field collected");

        match field.next() {
            Some(next) => {
                self.session.awaiting_field = Some(next);
                let fallback = format!("Thanks! And what is your {}?", next.label());
                let text = self
                    .llm_reply(
                        &prompts::next_field_instruction(field, &value, next),
                        fallback,
                    )
                    .await;
                EngineReply::say(text)
            }
            None => self.start_technical_phase().await,
        }
    }

    async fn start_technical_phase(&mut self) -> EngineReply {
        self.session.awaiting_field = None;
        self.session.step = Step::TechnicalQuestions;

        let tech_stack = self
            .session
            .profile
            .tech_stack
            .clone()
            .unwrap_or_default();
        let questions = self.generate_questions(&tech_stack).await;
        self.session.questions = questions.clone();
        self.session.question_index = 0;

        let first = &questions[0];
        let fallback = format!(
            "That's everything I need! Now for {QUESTION_COUNT} technical \
             questions based on your stack.\n\nQuestion 1: {first}"
        );
        let text = self
            .llm_reply(
                &prompts::questions_intro_instruction(&tech_stack, &questions),
                fallback,
            )
            .await;
        EngineReply::say(text)
    }

    async fn handle_technical(&mut self, input: &str) -> EngineReply {
        let Some(question) = self.session.current_question().map(String::from) else {
            return self.complete_screening().await;
        };

        if is_off_topic(input) {
            let fallback = format!(
                "Happy to chat after the screening! For now, back to the \
                 question: {question}"
            );
            let text = self
                .llm_reply(&prompts::off_topic_instruction(input, &question), fallback)
                .await;
            return EngineReply::say(text);
        }

        if input.split_whitespace().count() < MIN_ANSWER_WORDS {
            let fallback = format!(
                "That's a bit brief for me to assess. Could you elaborate with \
                 specific examples? The question was: {question}"
            );
            let text = self
                .llm_reply(&prompts::short_answer_instruction(input, &question), fallback)
                .await;
            return EngineReply::say(text);
        }

        let answered_index = self.session.question_index;
        let total = self.session.questions.len();
        match self.session.record_answer(input.to_string()).map(String::from) {
            Some(next) => {
                let fallback = format!(
                    "Thanks! Question {} of {}: {}",
                    answered_index + 2,
                    total,
                    next
                );
                let text = self
                    .llm_reply(
                        &prompts::next_question_instruction(answered_index, total, &next),
                        fallback,
                    )
                    .await;
                EngineReply::say(text)
            }
            None => self.complete_screening().await,
        }
    }

    async fn complete_screening(&mut self) -> EngineReply {
        self.session.step = Step::Complete;

        let name = self
            .session
            .profile
            .full_name
            .clone()
            .unwrap_or_else(|| "there".to_string());
        let fallback = format!(
            "That completes the screening - thank you, {name}! The team will \
             review your answers within 24-48 hours and a recruiter will reach \
             out by email within 2-3 business days."
        );
        let text = self
            .llm_reply(&prompts::completion_instruction(&name), fallback)
            .await;
        EngineReply::say(text)
    }

    async fn handle_post_completion(&mut self, input: &str) -> EngineReply {
        let fallback = "The screening is already complete - thanks again! Type \
                        'new' to start another, or 'bye' to leave."
            .to_string();
        let text = self
            .llm_reply(&prompts::post_completion_instruction(input), fallback)
            .await;
        EngineReply::say(text)
    }

    /// Generate the technical question set, falling back to the rule-based
    /// bank when the model is unreachable or returns too few usable lines.
    async fn generate_questions(&self, tech_stack: &str) -> Vec<String> {
        let technologies = recognized_technologies(tech_stack);

        if let Some(llm) = &self.llm {
            let prompt = prompts::generation_prompt(tech_stack, &technologies);
            match llm
                .chat(
                    prompts::GENERATOR_SYSTEM_PROMPT,
                    &prompt,
                    ChatOptions::generation(),
                )
                .await
            {
                Ok(text) => {
                    let mut questions = parse_questions(&text);
                    if questions.len() >= QUESTION_COUNT {
                        questions.truncate(QUESTION_COUNT);
                        return questions;
                    }
                    warn!(
                        usable = questions.len(),
                        "model returned too few questions, using fallback set"
                    );
                }
                Err(err) => {
                    warn!(error = %err, "question generation failed, using fallback set");
                }
            }
        }

        fallback_questions(tech_stack)
    }

    /// Ask the LLM to phrase this turn; degrade to the rule-based text on
    /// any failure. The instruction rides as a second system message on top
    /// of the recent history.
    async fn llm_reply(&self, instruction: &str, fallback: String) -> String {
        let Some(llm) = &self.llm else {
            return fallback;
        };

        let mut messages = vec![
            OllamaMessage::system(prompts::SYSTEM_PROMPT),
            OllamaMessage::system(format!("Current context: {instruction}")),
        ];
        messages.extend(self.session.context_window().iter().cloned());

        match llm.chat_with_history(messages, ChatOptions::reply()).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => fallback,
            Err(err) => {
                warn!(error = %err, "LLM reply failed, using rule-based response");
                fallback
            }
        }
    }

    /// Rule-based restatement of whatever the engine is waiting for.
    fn reprompt_text(&self) -> String {
        match self.session.step {
            Step::CollectingInfo => match self.session.awaiting_field {
                Some(field) => format!("Could you please share your {}?", field.label()),
                None => "Could you please try that again?".to_string(),
            },
            Step::TechnicalQuestions => match self.session.current_question() {
                Some(q) => format!(
                    "Question {}: {}",
                    self.session.question_index + 1,
                    q
                ),
                None => "Could you please try that again?".to_string(),
            },
            _ => "Could you please try that again?".to_string(),
        }
    }
}

/// Check if the user wants to leave.
fn is_exit_command(input: &str) -> bool {
    input
        .to_lowercase()
        .split_whitespace()
        .any(|word| EXIT_WORDS.contains(&word))
}

/// Heuristic off-topic detection: a question that isn't about the
/// information being collected.
fn is_off_topic(input: &str) -> bool {
    let lower = input.to_lowercase();

    let question_starters = [
        "what", "who", "how", "why", "when", "where", "can", "could", "would",
    ];
    let is_question = input.contains('?')
        || question_starters
            .iter()
            .any(|starter| lower.starts_with(starter));
    if !is_question {
        return false;
    }

    let info_terms = [
        "name", "email", "phone", "experience", "position", "location", "tech", "skill",
    ];
    !info_terms.iter().any(|term| lower.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_command_detection() {
        assert!(is_exit_command("bye"));
        assert!(is_exit_command("ok goodbye then"));
        assert!(is_exit_command("QUIT"));
        assert!(!is_exit_command("I like endless debugging"));
        assert!(!is_exit_command("my last job was a standby rotation"));
    }

    #[test]
    fn test_off_topic_detection() {
        assert!(is_off_topic("what is your name"));
        assert!(is_off_topic("can you help me with my taxes?"));
        assert!(!is_off_topic("John Doe"));
        // Questions about the screening itself stay on topic.
        assert!(!is_off_topic("why do you need my email?"));
        assert!(!is_off_topic("what do you mean by tech stack?"));
    }

    #[tokio::test]
    async fn test_offline_greeting_transition() {
        let mut engine = InterviewEngine::offline();
        let reply = engine.process_message("hello").await;
        assert!(!reply.done);
        assert!(reply.text.contains("full name"));
        assert_eq!(engine.session().step, Step::CollectingInfo);
        assert_eq!(engine.session().awaiting_field, Some(Field::FullName));
    }

    #[tokio::test]
    async fn test_offline_invalid_email_reprompts() {
        let mut engine = InterviewEngine::offline();
        engine.process_message("hello").await;
        engine.process_message("Ada Lovelace").await;

        let reply = engine.process_message("a@b").await;
        assert!(reply.text.contains("email"));
        // Still waiting on the same field.
        assert_eq!(engine.session().awaiting_field, Some(Field::Email));
        assert!(engine.session().profile.email.is_none());

        let reply = engine.process_message("ada@example.com").await;
        assert!(reply.text.contains("phone number"));
        assert_eq!(
            engine.session().profile.email.as_deref(),
            Some("ada@example.com")
        );
    }

    #[tokio::test]
    async fn test_offline_exit_is_graceful() {
        let mut engine = InterviewEngine::offline();
        engine.process_message("hello").await;
        let reply = engine.process_message("bye").await;
        assert!(reply.done);
        assert!(!engine.session().is_complete());
    }

    #[tokio::test]
    async fn test_short_technical_answer_reprompted() {
        let mut engine = InterviewEngine::offline();
        drive_to_technical_phase(&mut engine).await;

        let before = engine.session().transcript.len();
        let reply = engine.process_message("yes").await;
        assert!(reply.text.contains("elaborate"));
        assert_eq!(engine.session().transcript.len(), before);
    }

    #[tokio::test]
    async fn test_offline_questions_match_fallback_verbatim() {
        let mut engine = InterviewEngine::offline();
        drive_to_technical_phase(&mut engine).await;
        assert_eq!(
            engine.session().questions,
            fallback_questions("Python, Django, React, PostgreSQL, Docker, AWS")
        );
    }

    #[tokio::test]
    async fn test_reset_clears_session() {
        let mut engine = InterviewEngine::offline();
        engine.process_message("hello").await;
        engine.process_message("Ada Lovelace").await;
        engine.reset();
        assert_eq!(engine.session().step, Step::Greeting);
        assert!(engine.session().profile.full_name.is_none());
    }

    /// Walk an offline engine from greeting to the first technical question.
    async fn drive_to_technical_phase(engine: &mut InterviewEngine) {
        for answer in [
            "hello",
            "Ada Lovelace",
            "ada@example.com",
            "+1 555 867 5309",
            "7",
            "Backend Engineer",
            "London",
            "Python, Django, React, PostgreSQL, Docker, AWS",
        ] {
            engine.process_message(answer).await;
        }
        assert_eq!(engine.session().step, Step::TechnicalQuestions);
        assert_eq!(engine.session().questions.len(), QUESTION_COUNT);
    }
}
