//! The backend's operations.
//!
//! Each variant fixes the method, path and parameter shape of one call.
//! `ApiClient`'s typed methods are thin wrappers over these.

use crate::models::{
    Answer, ChatRequest, ExamSelection, LoginRequest, MiniTestSubmission, QuestionnaireAnswers,
    RegisterRequest, StaticQuestionnaire,
};

use super::{ApiError, RequestDescriptor};

#[derive(Debug, Clone)]
pub enum Endpoint {
    Register(RegisterRequest),
    Login(LoginRequest),
    ListExams,
    SelectExam { exam_id: i64 },
    SubmitQuestionnaire(StaticQuestionnaire),
    FetchQuestionnaireAi,
    SubmitQuestionnaireAi(Vec<Answer>),
    GetMiniTest,
    SubmitMiniTest(Vec<Answer>),
    GetWeeklyPlan { week_start: Option<String> },
    ListPlans,
    DeletePlan { id: i64 },
    GetProfile,
    GetProgress,
    GetAiHistory { limit: u32 },
    SendChat { message: String },
}

impl Endpoint {
    pub fn descriptor(&self) -> Result<RequestDescriptor, ApiError> {
        let descriptor = match self {
            Endpoint::Register(body) => RequestDescriptor::post("/register").json(body)?,
            Endpoint::Login(body) => RequestDescriptor::post("/token").json(body)?,
            Endpoint::ListExams => RequestDescriptor::get("/exams"),
            Endpoint::SelectExam { exam_id } => {
                RequestDescriptor::post("/select_exam").json(&ExamSelection { exam_id: *exam_id })?
            }
            Endpoint::SubmitQuestionnaire(body) => {
                RequestDescriptor::post("/questionnaire").json(body)?
            }
            Endpoint::FetchQuestionnaireAi => RequestDescriptor::get("/questionnaire_ai"),
            Endpoint::SubmitQuestionnaireAi(answers) => RequestDescriptor::post("/questionnaire_ai")
                .json(&QuestionnaireAnswers {
                    answers: answers.clone(),
                })?,
            Endpoint::GetMiniTest => RequestDescriptor::get("/mini_test"),
            Endpoint::SubmitMiniTest(answers) => {
                RequestDescriptor::post("/mini_test").json(&MiniTestSubmission {
                    answers: answers.clone(),
                })?
            }
            Endpoint::GetWeeklyPlan { week_start } => {
                let d = RequestDescriptor::get("/weekly_plan");
                match week_start {
                    Some(week_start) => d.query("week_start", week_start),
                    None => d,
                }
            }
            Endpoint::ListPlans => RequestDescriptor::get("/plans"),
            Endpoint::DeletePlan { id } => RequestDescriptor::delete(format!("/plans/{}", id)),
            Endpoint::GetProfile => RequestDescriptor::get("/profile"),
            Endpoint::GetProgress => RequestDescriptor::get("/progress"),
            Endpoint::GetAiHistory { limit } => {
                RequestDescriptor::get("/ai_history").query("limit", limit)
            }
            Endpoint::SendChat { message } => RequestDescriptor::post("/chat").json(&ChatRequest {
                message: message.clone(),
            })?,
        };
        Ok(descriptor)
    }

    /// One instance of every operation, with placeholder parameters.
    pub fn all_samples() -> Vec<Endpoint> {
        vec![
            Endpoint::Register(RegisterRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
            }),
            Endpoint::Login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
            }),
            Endpoint::ListExams,
            Endpoint::SelectExam { exam_id: 1 },
            Endpoint::SubmitQuestionnaire(StaticQuestionnaire::default()),
            Endpoint::FetchQuestionnaireAi,
            Endpoint::SubmitQuestionnaireAi(vec![Answer::new(1, "evet")]),
            Endpoint::GetMiniTest,
            Endpoint::SubmitMiniTest(vec![Answer::new(1, "B")]),
            Endpoint::GetWeeklyPlan { week_start: None },
            Endpoint::ListPlans,
            Endpoint::DeletePlan { id: 7 },
            Endpoint::GetProfile,
            Endpoint::GetProgress,
            Endpoint::GetAiHistory { limit: 5 },
            Endpoint::SendChat {
                message: "merhaba".to_string(),
            },
        ]
    }
}
