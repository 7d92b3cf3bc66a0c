//! Prompt text for the screening conversation.
//!
//! The system prompt frames the assistant's role; the per-situation
//! instructions are passed as a second system message so the model knows
//! exactly what the next turn should accomplish.

use scout_common::{Field, QUESTION_COUNT};

/// Role framing sent with every LLM request.
pub const SYSTEM_PROMPT: &str = "\
You are Scout, a friendly and professional technical recruiter conducting an \
initial candidate screening.

Your role:
1. Collect candidate information: full name, email, phone, years of experience, \
desired position, location, and detailed tech stack
2. Ask five tailored technical questions based on the candidate's tech stack
3. Ask technical questions one by one
4. Be conversational, friendly, and professional
5. Handle clarifications and follow-up questions naturally
6. Stay focused on the screening purpose

Guidelines:
- Be warm and encouraging
- Ask for clarification when answers are unclear
- Acknowledge good answers
- If someone asks something off-topic, answer briefly and steer back to the screening
- If someone asks your name, say you are the Scout screening assistant
- End gracefully when the screening is complete or the candidate wants to exit";

/// System prompt for the question-generation request.
pub const GENERATOR_SYSTEM_PROMPT: &str =
    "You are an expert technical recruiter. Generate specific, relevant interview questions.";

/// Static greeting printed at conversation start.
pub fn greeting() -> String {
    format!(
        "Hello! I'm Scout, a technical screening assistant.\n\n\
         I'll collect some information about you and then ask {QUESTION_COUNT} technical \
         questions based on your skills. This usually takes 10-15 minutes.\n\n\
         Ready to get started?"
    )
}

/// Instruction after the greeting reply: move to the first field.
pub fn transition_instruction(first: Field) -> String {
    format!(
        "The candidate has responded to your greeting. Naturally transition to \
         asking for their {}. Be friendly and conversational.",
        first.label()
    )
}

/// Instruction after a field was accepted: acknowledge and ask the next one.
pub fn next_field_instruction(accepted: Field, value: &str, next: Field) -> String {
    let mut instruction = format!(
        "You just collected the candidate's {}: \"{}\". Now ask for their {}. \
         Acknowledge what they provided and be conversational.",
        accepted.label(),
        value,
        next.label()
    );
    if next == Field::TechStack {
        instruction.push_str(
            " Ask for a detailed tech stack covering programming languages, \
             frameworks, databases, and tools.",
        );
    }
    instruction
}

/// Instruction when validation rejected an answer.
pub fn invalid_field_instruction(field: Field, value: &str, reason: &str) -> String {
    format!(
        "The candidate provided \"{}\" as their {}, but {}. Politely point out \
         the issue and ask them to provide it again.",
        value,
        field.label(),
        reason
    )
}

/// Instruction when the candidate asked something off-topic.
pub fn off_topic_instruction(question: &str, pending: &str) -> String {
    format!(
        "The candidate asked: \"{question}\". Answer it briefly and naturally, \
         then guide them back to the screening. You are currently waiting for: {pending}."
    )
}

/// Instruction to open the technical phase and ask the first question.
pub fn questions_intro_instruction(tech_stack: &str, questions: &[String]) -> String {
    let listed: Vec<String> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect();
    format!(
        "All candidate information is collected. Their tech stack is: {}.\n\
         You will ask these {} technical questions:\n{}\n\
         Let them know the technical assessment is starting, then ask the FIRST \
         question. Be encouraging.",
        tech_stack,
        questions.len(),
        listed.join("\n")
    )
}

/// Instruction when a technical answer was too short.
pub fn short_answer_instruction(answer: &str, question: &str) -> String {
    format!(
        "The candidate gave a very short answer: \"{answer}\" to the question: \
         \"{question}\". Politely ask them to elaborate with specific examples \
         and technical details. Be encouraging."
    )
}

/// Instruction after an accepted answer: acknowledge and ask the next question.
pub fn next_question_instruction(answered_index: usize, total: usize, next: &str) -> String {
    format!(
        "The candidate answered question {} of {}. Acknowledge their answer \
         positively, mention this is question {} of {}, and ask: \"{}\"",
        answered_index + 1,
        total,
        answered_index + 2,
        total,
        next
    )
}

/// Instruction for the completion message.
pub fn completion_instruction(name: &str) -> String {
    format!(
        "The candidate ({name}) has answered all technical questions. \
         Congratulate them, thank them for their time, and explain next steps: \
         the team reviews within 24-48 hours and a recruiter follows up by \
         email within 2-3 business days."
    )
}

/// Instruction for a graceful early exit.
pub fn exit_instruction(collected: usize, answered: usize) -> String {
    format!(
        "The candidate wants to exit. They provided {collected} profile fields \
         and answered {answered} technical questions. Generate a warm goodbye. \
         If the screening is incomplete, thank them and invite them to return."
    )
}

/// Instruction for messages arriving after completion.
pub fn post_completion_instruction(message: &str) -> String {
    format!(
        "The screening is already complete. The candidate said: \"{message}\". \
         Respond naturally and warmly. If they want to start over, mention they \
         can type 'new'."
    )
}

/// The user prompt asking the model for the technical question set.
pub fn generation_prompt(tech_stack: &str, technologies: &[String]) -> String {
    let tech_list = if technologies.is_empty() {
        tech_stack.to_string()
    } else {
        technologies.join(", ")
    };
    format!(
        "Generate exactly {QUESTION_COUNT} technical interview questions for a \
         candidate with this tech stack: {tech_stack}\n\n\
         Key technologies identified: {tech_list}\n\n\
         Requirements:\n\
         - Create specific questions for the mentioned technologies\n\
         - Cover different aspects: coding, architecture, debugging, best practices\n\
         - Appropriate for an initial screening\n\
         - Mix practical and conceptual questions\n\n\
         Return ONLY the {QUESTION_COUNT} questions, one per line, no numbering \
         or formatting."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_mentions_question_count() {
        assert!(greeting().contains("5 technical"));
    }

    #[test]
    fn test_next_field_instruction_expands_tech_stack() {
        let plain = next_field_instruction(Field::Phone, "+1 555 000 0000", Field::YearsExperience);
        assert!(!plain.contains("detailed tech stack covering"));

        let stack = next_field_instruction(Field::CurrentLocation, "Oslo", Field::TechStack);
        assert!(stack.contains("frameworks, databases, and tools"));
    }

    #[test]
    fn test_generation_prompt_lists_technologies() {
        let prompt = generation_prompt("Rust, tokio", &["Rust".to_string()]);
        assert!(prompt.contains("Key technologies identified: Rust"));
        assert!(prompt.contains("exactly 5"));
    }

    #[test]
    fn test_generation_prompt_without_recognized_tech() {
        let prompt = generation_prompt("homegrown lisp", &[]);
        assert!(prompt.contains("Key technologies identified: homegrown lisp"));
    }
}
