//! API client for the EduAI REST backend.
//!
//! `request` dispatches a descriptor exactly once and hands back whatever
//! the server answered, whatever the status. The typed call sites below it
//! turn non-2xx answers into `ApiError::Status` and decode 2xx bodies.

use reqwest::{header, Client, Request, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::models::{
    AiInteraction, Answer, ChatReply, DynamicQuestion, Exam, LoginRequest, MiniTest,
    MiniTestResult, Profile, ProgressRecord, RegisterRequest, StaticQuestionnaire, TokenResponse,
    WeeklyPlan,
};
use crate::session::Session;

use super::{ApiError, Endpoint, RequestDescriptor};

/// Status and decoded body of a completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// JSON body; `Null` when the server sent none (e.g. `204 No Content`).
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode a 2xx body, or surface the status and raw body as an error.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.check()
            .and_then(|body| {
                serde_json::from_value(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
            })
    }

    /// Accept any 2xx, ignoring the body.
    pub fn into_ack(self) -> Result<(), ApiError> {
        self.check().map(|_| ())
    }

    fn check(self) -> Result<Value, ApiError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// API client for the EduAI backend.
/// Clone is cheap - reqwest::Client and Session are both Arc-backed.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for `base_url` reading credentials from `session`.
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self, ApiError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.session.get_credential() {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| {
                    ApiError::InvalidRequest("credential is not a valid header value".to_string())
                })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Build the outgoing request for `descriptor` without sending it.
    pub fn prepare(&self, descriptor: &RequestDescriptor) -> Result<Request, ApiError> {
        let mut builder = self
            .client
            .request(descriptor.method.clone(), self.url(&descriptor.path))
            .headers(self.auth_headers()?);

        if !descriptor.query.is_empty() {
            builder = builder.query(&descriptor.query);
        }
        if let Some(ref body) = descriptor.body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }

    /// Send `descriptor` once. Resolves for every HTTP status; fails only
    /// when no response arrives or a 2xx body is not JSON.
    pub async fn request(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(descriptor)?;
        debug!(method = %descriptor.method, path = %descriptor.path, "Dispatching request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(method = %descriptor.method, path = %descriptor.path, status = %status, "Response received");

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) if status.is_success() => {
                    return Err(ApiError::InvalidResponse(format!(
                        "{} {}: {}",
                        descriptor.method, descriptor.path, e
                    )));
                }
                // Error pages from proxies are often HTML
                Err(_) => Value::String(ApiError::truncate_body(&String::from_utf8_lossy(&bytes))),
            }
        };

        Ok(ApiResponse { status, body })
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        self.request(&endpoint.descriptor()?).await?.into_json()
    }

    async fn call_ack(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        self.request(&endpoint.descriptor()?).await?.into_ack()
    }

    // ===== Auth =====

    pub async fn register(&self, form: RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.call(Endpoint::Register(form)).await
    }

    pub async fn login(&self, form: LoginRequest) -> Result<TokenResponse, ApiError> {
        self.call(Endpoint::Login(form)).await
    }

    // ===== Exams =====

    pub async fn fetch_exams(&self) -> Result<Vec<Exam>, ApiError> {
        self.call(Endpoint::ListExams).await
    }

    pub async fn select_exam(&self, exam_id: i64) -> Result<(), ApiError> {
        self.call_ack(Endpoint::SelectExam { exam_id }).await
    }

    // ===== Questionnaire =====

    pub async fn submit_questionnaire(&self, form: StaticQuestionnaire) -> Result<(), ApiError> {
        self.call_ack(Endpoint::SubmitQuestionnaire(form)).await
    }

    /// Generated questions; an empty list when the server has none.
    pub async fn fetch_questionnaire_ai(&self) -> Result<Vec<DynamicQuestion>, ApiError> {
        let questions: Option<Vec<DynamicQuestion>> =
            self.call(Endpoint::FetchQuestionnaireAi).await?;
        Ok(questions.unwrap_or_default())
    }

    pub async fn submit_questionnaire_ai(&self, answers: Vec<Answer>) -> Result<(), ApiError> {
        self.call_ack(Endpoint::SubmitQuestionnaireAi(answers)).await
    }

    // ===== Mini test =====

    pub async fn get_mini_test(&self) -> Result<MiniTest, ApiError> {
        self.call(Endpoint::GetMiniTest).await
    }

    pub async fn submit_mini_test(&self, answers: Vec<Answer>) -> Result<MiniTestResult, ApiError> {
        self.call(Endpoint::SubmitMiniTest(answers)).await
    }

    // ===== Weekly plans =====

    /// Generate (and store server-side) the plan for `week_start`, or the
    /// current week when `None`.
    pub async fn get_weekly_plan(&self, week_start: Option<String>) -> Result<WeeklyPlan, ApiError> {
        self.call(Endpoint::GetWeeklyPlan { week_start }).await
    }

    pub async fn list_plans(&self) -> Result<Vec<WeeklyPlan>, ApiError> {
        self.call(Endpoint::ListPlans).await
    }

    pub async fn delete_plan(&self, id: i64) -> Result<(), ApiError> {
        self.call_ack(Endpoint::DeletePlan { id }).await
    }

    // ===== Profile =====

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        self.call(Endpoint::GetProfile).await
    }

    pub async fn get_progress(&self) -> Result<Vec<ProgressRecord>, ApiError> {
        self.call(Endpoint::GetProgress).await
    }

    pub async fn get_ai_history(&self, limit: u32) -> Result<Vec<AiInteraction>, ApiError> {
        self.call(Endpoint::GetAiHistory { limit }).await
    }

    // ===== Chat =====

    pub async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.call(Endpoint::SendChat {
            message: message.to_string(),
        })
        .await
    }
}
