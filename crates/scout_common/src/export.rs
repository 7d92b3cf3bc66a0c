//! JSON export for the recruitment team.
//!
//! One pretty-printed document per screening: metadata block plus the
//! collected profile, the questions asked, and the ordered transcript.

use crate::session::{QaPair, Session};
use crate::candidate::CandidateProfile;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Export metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub session_id: Uuid,
    pub screening_date: DateTime<Utc>,
    pub completion_status: CompletionStatus,
    pub total_questions: usize,
    pub answered_questions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Complete,
    Incomplete,
}

/// Candidate data block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateData {
    pub profile: CandidateProfile,
    pub questions_asked: Vec<String>,
    pub transcript: Vec<QaPair>,
}

/// The full export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningExport {
    pub metadata: ExportMetadata,
    pub candidate: CandidateData,
}

impl ScreeningExport {
    /// Build the export document from a session.
    pub fn from_session(session: &Session) -> Self {
        let status = if session.is_complete() {
            CompletionStatus::Complete
        } else {
            CompletionStatus::Incomplete
        };

        Self {
            metadata: ExportMetadata {
                session_id: session.id,
                screening_date: session.started_at,
                completion_status: status,
                total_questions: session.questions.len(),
                answered_questions: session.transcript.len(),
            },
            candidate: CandidateData {
                profile: session.profile.clone(),
                questions_asked: session.questions.clone(),
                transcript: session.transcript.clone(),
            },
        }
    }

    /// Default export filename: screening_<name>_<YYYYMMDD>.json.
    pub fn filename(&self) -> String {
        let name = self
            .candidate
            .profile
            .full_name
            .as_deref()
            .unwrap_or("candidate")
            .replace(char::is_whitespace, "_");
        format!(
            "screening_{}_{}.json",
            name,
            self.metadata.screening_date.format("%Y%m%d")
        )
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize screening export")
    }

    /// Write the export under `dir`, returning the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export dir {}", dir.display()))?;
        let path = dir.join(self.filename());
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Field;
    use crate::session::Step;

    fn completed_session() -> Session {
        let mut session = Session::new();
        session.profile.set(Field::FullName, "Ada Lovelace".to_string());
        session.profile.set(Field::Email, "ada@example.com".to_string());
        session.profile.set(Field::Phone, "+1 555 867 5309".to_string());
        session.profile.set(Field::YearsExperience, "7".to_string());
        session.profile.set(Field::DesiredPosition, "Backend Engineer".to_string());
        session.profile.set(Field::CurrentLocation, "London".to_string());
        session
            .profile
            .set(Field::TechStack, "Python, Django, PostgreSQL".to_string());

        session.questions = (1..=5).map(|i| format!("Question {i}?")).collect();
        for i in 1..=5 {
            session.record_answer(format!("A sufficiently detailed answer number {i}."));
        }
        session.step = Step::Complete;
        session
    }

    #[test]
    fn test_completed_export_has_five_pairs_and_all_fields() {
        let export = ScreeningExport::from_session(&completed_session());
        assert_eq!(export.metadata.completion_status, CompletionStatus::Complete);
        assert_eq!(export.candidate.transcript.len(), 5);
        assert_eq!(export.metadata.total_questions, 5);
        assert_eq!(export.metadata.answered_questions, 5);

        let json = export.to_json().unwrap();
        for needle in [
            "Ada Lovelace",
            "ada@example.com",
            "+1 555 867 5309",
            "Backend Engineer",
            "London",
            "Python, Django, PostgreSQL",
        ] {
            assert!(json.contains(needle), "export missing {needle}");
        }
    }

    #[test]
    fn test_incomplete_session_marked_incomplete() {
        let mut session = Session::new();
        session.profile.set(Field::FullName, "Ada".to_string());
        let export = ScreeningExport::from_session(&session);
        assert_eq!(export.metadata.completion_status, CompletionStatus::Incomplete);
        assert_eq!(export.metadata.answered_questions, 0);
    }

    #[test]
    fn test_filename_uses_name_and_date() {
        let export = ScreeningExport::from_session(&completed_session());
        let filename = export.filename();
        assert!(filename.starts_with("screening_Ada_Lovelace_"));
        assert!(filename.ends_with(".json"));
    }

    #[test]
    fn test_filename_without_name_falls_back() {
        let export = ScreeningExport::from_session(&Session::new());
        assert!(export.filename().starts_with("screening_candidate_"));
    }

    #[test]
    fn test_write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = ScreeningExport::from_session(&completed_session());
        let path = export.write_to(dir.path()).unwrap();
        assert!(path.exists());

        let back: ScreeningExport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.candidate.transcript.len(), 5);
    }
}
