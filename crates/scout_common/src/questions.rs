//! Question parsing and the rule-based fallback bank.
//!
//! The LLM is asked for exactly [`QUESTION_COUNT`] questions; its output is
//! parsed here. When the model is unreachable or returns too few usable
//! lines, the fallback bank supplies the set verbatim.

use crate::tech_stack::recognized_technologies;
use regex::Regex;
use std::sync::OnceLock;

/// Every completed screening asks exactly this many technical questions.
pub const QUESTION_COUNT: usize = 5;

/// Lines shorter than this are treated as LLM chatter, not questions.
const MIN_QUESTION_LEN: usize = 20;

fn numbering_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+[.):]\s*").unwrap())
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-•*]\s*").unwrap())
}

/// Parse questions out of raw LLM output, one per line.
///
/// Strips numbering and bullets, discards blank and too-short lines.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = numbering_re().replace(line, "");
            bullet_re().replace(&line, "").to_string()
        })
        .filter(|line| line.chars().count() > MIN_QUESTION_LEN)
        .collect()
}

/// Canned question for one recognized technology, if the bank has one.
fn bank_question(tech: &str) -> Option<&'static str> {
    match tech {
        "Python" => Some(
            "Describe your experience with Python and explain a challenging problem you solved using it.",
        ),
        "Django" => Some("How do you structure a Django project and handle database migrations?"),
        "React" => Some("Explain your approach to state management in React applications."),
        "Javascript" => Some("What JavaScript ES6+ features do you use most and why?"),
        "Postgresql" => Some("How do you optimize PostgreSQL queries for better performance?"),
        "Docker" => Some("Describe how you use Docker in your development workflow."),
        _ => None,
    }
}

/// General questions that pad the fallback set for any stack.
const GENERAL_QUESTIONS: [&str; 5] = [
    "What's your approach to writing clean, maintainable code?",
    "How do you debug complex technical issues?",
    "Describe your experience with version control and team collaboration.",
    "How do you stay updated with new technologies?",
    "Tell me about a project you're proud of and your role in it.",
];

/// Build the static fallback question set for a declared tech stack.
///
/// Stack-specific questions first, padded with general ones, always
/// exactly [`QUESTION_COUNT`] entries. Deterministic: the same stack
/// always yields the same set, verbatim.
pub fn fallback_questions(tech_stack: &str) -> Vec<String> {
    let mut questions: Vec<String> = recognized_technologies(tech_stack)
        .iter()
        .filter_map(|tech| bank_question(tech))
        .map(String::from)
        .collect();

    questions.extend(GENERAL_QUESTIONS.iter().map(|q| q.to_string()));
    questions.truncate(QUESTION_COUNT);
    questions
}
