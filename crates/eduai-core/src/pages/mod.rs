//! Per-page view state and actions.
//!
//! Pages never talk to the network themselves. An action returns a
//! `Command`; running it against an `ApiClient` yields an `Outcome`, which
//! is applied back to the page. Applying may ask for a navigation.
//!
//! ```text
//! page.on_enter() / page.submit() ──► Command ──run(api)──► Outcome ──► page.apply()
//! ```

pub mod auth;
pub mod chat;
pub mod exams;
pub mod overview;
pub mod questionnaire;
pub mod weekly_plan;

use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::models::{
    Answer, ChatReply, DynamicQuestion, Exam, LoginRequest, MiniTest, MiniTestResult,
    RegisterRequest, StaticQuestionnaire, TokenResponse, WeeklyPlan,
};
use crate::routes::Route;
use crate::session::Session;

pub use auth::{LoginField, LoginPage, RegisterField, RegisterPage};
pub use chat::{ChatMessage, ChatPage, ChatRole};
pub use exams::ExamSelectionPage;
pub use mini_test::{MiniTestPage, ResultRow};
pub use overview::{interaction_line, questionnaire_lines, Overview, OverviewKind, OverviewPage};
pub use questionnaire::{QuestionnaireForm, QuestionnairePage, StaticField, StaticForm};
pub use weekly_plan::WeeklyPlanPage;

/// Maximum length for single-line text inputs.
pub const MAX_INPUT_LENGTH: usize = 128;

/// Maximum length for a chat message.
pub const MAX_CHAT_LENGTH: usize = 2000;

/// Characters accepted in form inputs: printable, no control characters.
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

pub fn can_add_char(current_len: usize, max_len: usize, c: char) -> bool {
    current_len < max_len && is_valid_input_char(c)
}

/// Push `c` onto `field` if it fits.
pub(crate) fn push_char(field: &mut String, max_len: usize, c: char) {
    if can_add_char(field.chars().count(), max_len, c) {
        field.push(c);
    }
}

/// A backend operation requested by a page.
#[derive(Debug, Clone)]
pub enum Command {
    Register(RegisterRequest),
    Login(LoginRequest),
    LoadExams,
    SelectExam(i64),
    LoadQuestionnaire,
    SubmitStaticQuestionnaire(StaticQuestionnaire),
    SubmitDynamicQuestionnaire(Vec<Answer>),
    LoadOverview { history_limit: u32 },
    LoadMiniTest,
    SubmitMiniTest(Vec<Answer>),
    LoadPlans,
    CreatePlan,
    DeletePlan(i64),
    SendChat(String),
}

/// Result of running a `Command`.
#[derive(Debug)]
pub enum Outcome {
    Registered(Result<TokenResponse, ApiError>),
    LoggedIn(Result<TokenResponse, ApiError>),
    ExamsLoaded(Result<Vec<Exam>, ApiError>),
    ExamSelected(Result<(), ApiError>),
    QuestionnaireLoaded(Result<Vec<DynamicQuestion>, ApiError>),
    QuestionnaireSubmitted(Result<(), ApiError>),
    OverviewLoaded(Result<Overview, ApiError>),
    MiniTestLoaded(Result<MiniTest, ApiError>),
    MiniTestGraded(Result<MiniTestResult, ApiError>),
    PlansLoaded(Result<Vec<WeeklyPlan>, ApiError>),
    /// The generated plan, and the reloaded list if generation succeeded.
    PlanCreated {
        plan: Result<WeeklyPlan, ApiError>,
        plans: Option<Result<Vec<WeeklyPlan>, ApiError>>,
    },
    PlanDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
    ChatReplied(Result<ChatReply, ApiError>),
}

impl Command {
    pub async fn run(self, api: &ApiClient) -> Outcome {
        debug!(command = ?self.name(), "Running page command");
        match self {
            Command::Register(form) => Outcome::Registered(api.register(form).await),
            Command::Login(form) => Outcome::LoggedIn(api.login(form).await),
            Command::LoadExams => Outcome::ExamsLoaded(api.fetch_exams().await),
            Command::SelectExam(id) => Outcome::ExamSelected(api.select_exam(id).await),
            Command::LoadQuestionnaire => {
                Outcome::QuestionnaireLoaded(api.fetch_questionnaire_ai().await)
            }
            Command::SubmitStaticQuestionnaire(form) => {
                Outcome::QuestionnaireSubmitted(api.submit_questionnaire(form).await)
            }
            Command::SubmitDynamicQuestionnaire(answers) => {
                Outcome::QuestionnaireSubmitted(api.submit_questionnaire_ai(answers).await)
            }
            Command::LoadOverview { history_limit } => {
                Outcome::OverviewLoaded(Overview::fetch(api, history_limit).await)
            }
            Command::LoadMiniTest => Outcome::MiniTestLoaded(api.get_mini_test().await),
            Command::SubmitMiniTest(answers) => {
                Outcome::MiniTestGraded(api.submit_mini_test(answers).await)
            }
            Command::LoadPlans => Outcome::PlansLoaded(api.list_plans().await),
            Command::CreatePlan => {
                let plan = api.get_weekly_plan(None).await;
                let plans = match plan {
                    Ok(_) => Some(api.list_plans().await),
                    Err(_) => None,
                };
                Outcome::PlanCreated { plan, plans }
            }
            Command::DeletePlan(id) => Outcome::PlanDeleted {
                id,
                result: api.delete_plan(id).await,
            },
            Command::SendChat(message) => Outcome::ChatReplied(api.send_chat(&message).await),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Command::Register(_) => "register",
            Command::Login(_) => "login",
            Command::LoadExams => "load_exams",
            Command::SelectExam(_) => "select_exam",
            Command::LoadQuestionnaire => "load_questionnaire",
            Command::SubmitStaticQuestionnaire(_) => "submit_questionnaire",
            Command::SubmitDynamicQuestionnaire(_) => "submit_questionnaire_ai",
            Command::LoadOverview { .. } => "load_overview",
            Command::LoadMiniTest => "load_mini_test",
            Command::SubmitMiniTest(_) => "submit_mini_test",
            Command::LoadPlans => "load_plans",
            Command::CreatePlan => "create_plan",
            Command::DeletePlan(_) => "delete_plan",
            Command::SendChat(_) => "send_chat",
        }
    }
}

/// The page currently on screen.
#[derive(Debug)]
pub enum PageState {
    Register(RegisterPage),
    Login(LoginPage),
    Exams(ExamSelectionPage),
    Questionnaire(QuestionnairePage),
    Dashboard(OverviewPage),
    Profile(OverviewPage),
    MiniTest(MiniTestPage),
    WeeklyPlan(WeeklyPlanPage),
    Chat(ChatPage),
}

impl PageState {
    /// Fresh state for `route`. `Root` has no page of its own.
    pub fn for_route(route: Route) -> Option<Self> {
        let page = match route {
            Route::Root => return None,
            Route::Register => PageState::Register(RegisterPage::default()),
            Route::Login => PageState::Login(LoginPage::default()),
            Route::Exams => PageState::Exams(ExamSelectionPage::default()),
            Route::Questionnaire => PageState::Questionnaire(QuestionnairePage::default()),
            Route::Dashboard => PageState::Dashboard(OverviewPage::new(OverviewKind::Dashboard)),
            Route::Profile => PageState::Profile(OverviewPage::new(OverviewKind::Profile)),
            Route::MiniTest => PageState::MiniTest(MiniTestPage::default()),
            Route::WeeklyPlan => PageState::WeeklyPlan(WeeklyPlanPage::default()),
            Route::Chat => PageState::Chat(ChatPage::default()),
        };
        Some(page)
    }

    pub fn route(&self) -> Route {
        match self {
            PageState::Register(_) => Route::Register,
            PageState::Login(_) => Route::Login,
            PageState::Exams(_) => Route::Exams,
            PageState::Questionnaire(_) => Route::Questionnaire,
            PageState::Dashboard(_) => Route::Dashboard,
            PageState::Profile(_) => Route::Profile,
            PageState::MiniTest(_) => Route::MiniTest,
            PageState::WeeklyPlan(_) => Route::WeeklyPlan,
            PageState::Chat(_) => Route::Chat,
        }
    }

    /// The load a page issues when it is entered, if any.
    pub fn on_enter(&mut self) -> Option<Command> {
        match self {
            PageState::Register(_) | PageState::Login(_) | PageState::Chat(_) => None,
            PageState::Exams(page) => Some(page.on_enter()),
            PageState::Questionnaire(page) => Some(page.on_enter()),
            PageState::Dashboard(page) | PageState::Profile(page) => Some(page.on_enter()),
            PageState::MiniTest(page) => Some(page.on_enter()),
            PageState::WeeklyPlan(page) => Some(page.on_enter()),
        }
    }

    /// Apply `outcome` and return the route to navigate to, if any.
    pub fn apply(&mut self, outcome: Outcome, session: &Session) -> Option<Route> {
        match (self, outcome) {
            (PageState::Register(page), Outcome::Registered(result)) => page.apply(result, session),
            (PageState::Login(page), Outcome::LoggedIn(result)) => page.apply(result, session),
            (PageState::Exams(page), Outcome::ExamsLoaded(result)) => {
                page.apply_loaded(result);
                None
            }
            (PageState::Exams(page), Outcome::ExamSelected(result)) => page.apply_selected(result),
            (PageState::Questionnaire(page), Outcome::QuestionnaireLoaded(result)) => {
                page.apply_loaded(result);
                None
            }
            (PageState::Questionnaire(page), Outcome::QuestionnaireSubmitted(result)) => {
                page.apply_submitted(result)
            }
            (PageState::Dashboard(page) | PageState::Profile(page), Outcome::OverviewLoaded(result)) => {
                page.apply_loaded(result);
                None
            }
            (PageState::MiniTest(page), Outcome::MiniTestLoaded(result)) => {
                page.apply_loaded(result);
                None
            }
            (PageState::MiniTest(page), Outcome::MiniTestGraded(result)) => {
                page.apply_graded(result);
                None
            }
            (PageState::WeeklyPlan(page), Outcome::PlansLoaded(result)) => {
                page.apply_plans(result);
                None
            }
            (PageState::WeeklyPlan(page), Outcome::PlanCreated { plan, plans }) => {
                page.apply_created(plan, plans);
                None
            }
            (PageState::WeeklyPlan(page), Outcome::PlanDeleted { id, result }) => {
                page.apply_deleted(id, result);
                None
            }
            (PageState::Chat(page), Outcome::ChatReplied(result)) => {
                page.apply_reply(result);
                None
            }
            (page, outcome) => {
                warn!(route = page.route().path(), ?outcome, "Outcome does not belong to this page");
                None
            }
        }
    }

    /// Run `command` and apply its outcome in one step.
    pub async fn execute(
        &mut self,
        command: Command,
        api: &ApiClient,
    ) -> Option<Route> {
        let outcome = command.run(api).await;
        self.apply(outcome, api.session())
    }
}
