use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Answer, StaticQuestionnaire};

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub exams: Vec<String>,
    #[serde(default)]
    pub questionnaire: Option<ProfileQuestionnaire>,
}

/// The last questionnaire the user filled in, in whichever form it was sent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProfileQuestionnaire {
    Answers { answers: Vec<Answer> },
    Static(StaticQuestionnaire),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: i64,
    pub topic: String,
    pub status: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl ProgressRecord {
    pub fn score_display(&self) -> String {
        match self.score {
            Some(score) => format!("{}", score),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiInteraction {
    pub id: i64,
    pub interaction_type: String,
    pub timestamp: String,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
}
