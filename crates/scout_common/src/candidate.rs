//! Candidate intake fields and the collected profile.
//!
//! Fields are asked in a fixed order; each one carries the human label used
//! in prompts and validation messages.

use serde::{Deserialize, Serialize};

/// The pieces of information collected before the technical questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Phone,
    YearsExperience,
    DesiredPosition,
    CurrentLocation,
    TechStack,
}

impl Field {
    /// Collection order. Tech stack is deliberately last: question
    /// generation depends on it.
    pub const ORDER: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::YearsExperience,
        Field::DesiredPosition,
        Field::CurrentLocation,
        Field::TechStack,
    ];

    /// Human label used in prompts and validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "full name",
            Field::Email => "email address",
            Field::Phone => "phone number",
            Field::YearsExperience => "years of professional experience",
            Field::DesiredPosition => "desired position",
            Field::CurrentLocation => "current location",
            Field::TechStack => {
                "detailed tech stack (programming languages, frameworks, databases, tools)"
            }
        }
    }

    /// The field asked after this one, if any.
    pub fn next(&self) -> Option<Field> {
        let idx = Self::ORDER.iter().position(|f| f == self)?;
        Self::ORDER.get(idx + 1).copied()
    }
}

/// Candidate information collected turn by turn.
///
/// Values are stored as the candidate typed them, post-validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
}

impl CandidateProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = Some(value),
            Field::Email => self.email = Some(value),
            Field::Phone => self.phone = Some(value),
            Field::YearsExperience => self.years_experience = Some(value),
            Field::DesiredPosition => self.desired_position = Some(value),
            Field::CurrentLocation => self.current_location = Some(value),
            Field::TechStack => self.tech_stack = Some(value),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::YearsExperience => self.years_experience.as_deref(),
            Field::DesiredPosition => self.desired_position.as_deref(),
            Field::CurrentLocation => self.current_location.as_deref(),
            Field::TechStack => self.tech_stack.as_deref(),
        }
    }

    /// Fields already collected, in collection order.
    pub fn collected_fields(&self) -> Vec<Field> {
        Field::ORDER
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    /// True once every field has been collected.
    pub fn is_complete(&self) -> bool {
        Field::ORDER.iter().all(|f| self.get(*f).is_some())
    }
}
