//! Scout Control - conversational technical-screening CLI.
//!
//! Collects candidate information over a terminal chat, asks five
//! tech-stack-tailored questions phrased by a local Ollama model, and
//! exports the transcript as JSON. Degrades to a rule-based question set
//! when the model is unreachable.

pub mod doctor;
pub mod engine;
pub mod llm_client;
pub mod logging;
pub mod prompts;
pub mod repl;
pub mod spinner;
pub mod ui;
