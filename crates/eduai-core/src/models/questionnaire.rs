//! Questionnaire payloads.
//!
//! The backend may generate a questionnaire per user. Each generated
//! question names its input type through a `type` field; that is decoded
//! into `QuestionKind` once, here, so pages match on the variant instead of
//! probing optional fields.

use serde::{Deserialize, Serialize};

use super::{Answer, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
    ];

    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Görsel",
            LearningStyle::Auditory => "İşitsel",
            LearningStyle::Kinesthetic => "Uygulamalı",
        }
    }
}

/// Body of `POST /questionnaire`. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticQuestionnaire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficult_topics: Option<Vec<String>>,
}

impl StaticQuestionnaire {
    pub fn is_empty(&self) -> bool {
        self.learning_style.is_none()
            && self.daily_hours.is_none()
            && self.difficult_topics.as_ref().map_or(true, |t| t.is_empty())
    }
}

/// Input widget a generated question asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    Choice { options: Vec<String> },
    Number,
    Text,
}

/// A question from `GET /questionnaire_ai`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDynamicQuestion")]
pub struct DynamicQuestion {
    pub id: QuestionId,
    pub question: String,
    pub kind: QuestionKind,
}

#[derive(Deserialize)]
struct RawDynamicQuestion {
    id: QuestionId,
    question: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
}

impl From<RawDynamicQuestion> for DynamicQuestion {
    fn from(raw: RawDynamicQuestion) -> Self {
        // A choice question without options can only be answered as text
        let kind = match (raw.kind.as_deref(), raw.options) {
            (Some("choice"), Some(options)) => QuestionKind::Choice { options },
            (Some("number"), _) => QuestionKind::Number,
            _ => QuestionKind::Text,
        };
        Self {
            id: raw.id,
            question: raw.question,
            kind,
        }
    }
}

/// Body of `POST /questionnaire_ai`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionnaireAnswers {
    pub answers: Vec<Answer>,
}
