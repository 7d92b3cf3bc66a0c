//! Shared types and pure logic for the Scout screening assistant.
//!
//! Everything here is independent of the terminal and the network:
//! candidate intake fields, validation, tech-stack parsing, the question
//! bank, the session record, the export document, Ollama wire types,
//! configuration, and the error taxonomy.

pub mod candidate;
pub mod config;
pub mod error;
pub mod export;
pub mod ollama;
pub mod questions;
pub mod session;
pub mod tech_stack;
pub mod validate;

pub use candidate::{CandidateProfile, Field};
pub use config::ScoutConfig;
pub use error::ScoutError;
pub use export::ScreeningExport;
pub use ollama::{ChatOptions, OllamaChatRequest, OllamaChatResponse, OllamaMessage};
pub use questions::QUESTION_COUNT;
pub use session::{QaPair, Session, Step};
