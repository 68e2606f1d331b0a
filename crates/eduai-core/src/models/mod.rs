//! Request and response payloads for the EduAI backend.
//!
//! - `auth`: registration, login and the token response
//! - `exam`: exam types and exam selection
//! - `questionnaire`: static and AI-generated questionnaires
//! - `mini_test`: quiz questions, submissions and graded results
//! - `plan`: weekly study plans
//! - `profile`: profile, progress records and AI interaction history
//! - `chat`: chat messages

pub mod auth;
pub mod chat;
pub mod exam;
pub mod mini_test;
pub mod plan;
pub mod profile;
pub mod questionnaire;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use chat::{ChatReply, ChatRequest};
pub use exam::{Exam, ExamSelection};
pub use mini_test::{
    MiniTest, MiniTestDetail, MiniTestQuestion, MiniTestResult, MiniTestSubmission, QuizQuestion,
};
pub use plan::{PlanSubject, PlanTest, WeeklyPlan};
pub use profile::{AiInteraction, Profile, ProfileQuestionnaire, ProgressRecord};
pub use questionnaire::{
    DynamicQuestion, LearningStyle, QuestionKind, QuestionnaireAnswers, StaticQuestionnaire,
};

/// Question identifier.
///
/// Generated questions come back with integer ids, but graded results echo
/// them as strings, so both forms are accepted and compared by text.
#[derive(Debug, Clone, Serialize, Deserialize, Eq)]
#[serde(untagged)]
pub enum QuestionId {
    Int(i64),
    Text(String),
}

impl PartialEq for QuestionId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (QuestionId::Int(a), QuestionId::Int(b)) => a == b,
            (QuestionId::Text(a), QuestionId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Int(id) => write!(f, "{}", id),
            QuestionId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        QuestionId::Int(id)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        QuestionId::Text(id.to_string())
    }
}

/// One `{id, answer}` pair, shared by questionnaire and mini test submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: QuestionId,
    pub answer: String,
}

impl Answer {
    pub fn new(id: impl Into<QuestionId>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_mixed_forms_compare_equal() {
        assert_eq!(QuestionId::Int(1), QuestionId::Text("1".to_string()));
        assert_ne!(QuestionId::Int(1), QuestionId::Text("2".to_string()));
    }

    #[test]
    fn test_question_id_parses_both_forms() {
        let ids: Vec<QuestionId> = serde_json::from_str(r#"[3, "q4"]"#).unwrap();
        assert_eq!(ids[0], QuestionId::Int(3));
        assert_eq!(ids[1].to_string(), "q4");
    }

    #[test]
    fn test_answer_serializes_flat() {
        let json = serde_json::to_value(Answer::new(1, "B")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "answer": "B"}));
    }
}
