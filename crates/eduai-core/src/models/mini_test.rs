//! Mini test payloads.
//!
//! `GET /mini_test` may include each question's answer key. The key is
//! kept on `MiniTestQuestion` as received and removed by converting into
//! `QuizQuestion`, the only type the quiz view holds.

use serde::{Deserialize, Serialize};

use super::{Answer, QuestionId};

#[derive(Debug, Clone, Deserialize)]
pub struct MiniTest {
    #[serde(default)]
    pub questions: Vec<MiniTestQuestion>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MiniTestQuestion {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A question as shown to the student, without the answer key.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub choices: Vec<String>,
}

impl From<MiniTestQuestion> for QuizQuestion {
    fn from(q: MiniTestQuestion) -> Self {
        Self {
            id: q.id,
            prompt: q.prompt,
            choices: q.choices,
        }
    }
}

impl MiniTest {
    /// Drop every answer key.
    pub fn into_quiz(self) -> Vec<QuizQuestion> {
        self.questions.into_iter().map(QuizQuestion::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiniTestSubmission {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MiniTestResult {
    pub total: u32,
    pub correct: u32,
    #[serde(default)]
    pub details: Vec<MiniTestDetail>,
}

impl MiniTestResult {
    /// `correct/total`
    pub fn summary(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MiniTestDetail {
    pub id: QuestionId,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub your_answer: Option<String>,
    pub correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_quiz_strips_answers() {
        let json = r#"{"questions": [
            {"id": 1, "prompt": "2+2?", "choices": ["3", "4"], "answer": "4"},
            {"id": 2, "prompt": "3+3?", "choices": ["6", "7"]}
        ]}"#;
        let test: MiniTest = serde_json::from_str(json).unwrap();
        assert_eq!(test.questions[0].answer.as_deref(), Some("4"));

        let quiz = test.into_quiz();
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].choices, vec!["3", "4"]);
    }

    #[test]
    fn test_parse_result_with_string_ids_and_nulls() {
        let json = r#"{"total": 2, "correct": 1, "details": [
            {"id": "1", "correct": true, "correct_answer": "4", "your_answer": "4"},
            {"id": "2", "correct": false, "correct_answer": "3", "your_answer": null,
             "explanation": "f'(x) = 3x^2"}
        ]}"#;
        let result: MiniTestResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.summary(), "1/2");
        assert_eq!(result.details[0].id, QuestionId::Int(1));
        assert_eq!(result.details[1].your_answer, None);
        assert_eq!(result.details[1].explanation.as_deref(), Some("f'(x) = 3x^2"));
    }
}
