//! End-to-end page flows against the stub backend.

mod support;

use serde_json::json;

use eduai_core::api::Endpoint;
use eduai_core::i18n;
use eduai_core::models::LoginRequest;
use eduai_core::pages::{Command, PageState, QuestionnaireForm};
use eduai_core::{ApiClient, Navigator, Route, Session};
use support::StubBackend;

/// Navigate to `route` and run the rendered page's load, as the TUI does.
async fn visit(nav: &mut Navigator, api: &ApiClient, route: Route) -> PageState {
    let rendered = nav.navigate(route);
    let mut page = PageState::for_route(rendered).unwrap();
    if let Some(command) = page.on_enter() {
        let next = page.execute(command, api).await;
        assert_eq!(next, None, "page load should not navigate");
    }
    page
}

fn authed(token: &str) -> Session {
    let session = Session::in_memory();
    session.set_credential(token);
    session
}

fn stub_overview(backend: &StubBackend) {
    backend.respond(
        "GET",
        "/profile",
        200,
        json!({"id": 1, "name": "Ayşe", "email": "a@b.c", "exams": ["YKS"], "questionnaire": null}),
    );
    backend.respond(
        "GET",
        "/progress",
        200,
        json!([{"id": 1, "topic": "Limit", "status": "completed", "score": 80.0}]),
    );
    backend.respond(
        "GET",
        "/ai_history",
        200,
        json!([{"id": 3, "interaction_type": "chat", "timestamp": "2024-05-06T09:30:00",
                "content": "Limit nedir?", "result": null}]),
    );
}

#[tokio::test]
async fn test_login_stores_token_and_protected_loads_send_it() {
    let backend = StubBackend::start().await;
    backend.respond(
        "POST",
        "/token",
        200,
        json!({"access_token": "abc", "token_type": "bearer"}),
    );
    stub_overview(&backend);

    let session = Session::in_memory();
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session.clone(), Route::Login);

    let mut page = PageState::for_route(nav.current()).unwrap();
    let PageState::Login(login) = &mut page else {
        panic!("expected login page");
    };
    login.form = LoginRequest {
        email: "a@b.c".to_string(),
        password: "secret".to_string(),
    };
    let command = login.submit().unwrap();
    let next = page.execute(command, &api).await;

    assert_eq!(next, Some(Route::Dashboard));
    assert_eq!(session.get_credential().as_deref(), Some("abc"));

    let page = visit(&mut nav, &api, Route::Dashboard).await;
    let PageState::Dashboard(dashboard) = &page else {
        panic!("expected dashboard");
    };
    let data = dashboard.data.as_ref().unwrap();
    assert_eq!(data.profile.name, "Ayşe");
    assert_eq!(data.progress[0].score_display(), "80");
    assert_eq!(data.history.len(), 1);

    let requests = backend.requests();
    assert_eq!(requests[0].path, "/token");
    assert_eq!(requests[0].authorization, None);
    assert_eq!(
        requests[0].body,
        Some(json!({"email": "a@b.c", "password": "secret"}))
    );
    assert_eq!(requests.len(), 4);
    for request in &requests[1..] {
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
    }
    let history = requests.iter().find(|r| r.path == "/ai_history").unwrap();
    assert_eq!(history.query.as_deref(), Some("limit=5"));
}

#[tokio::test]
async fn test_protected_routes_redirect_without_requests() {
    let backend = StubBackend::start().await;
    let session = Session::in_memory();
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Register);

    for route in Route::ALL.iter().copied().filter(Route::is_protected) {
        let page = visit(&mut nav, &api, route).await;
        assert_eq!(page.route(), Route::Login, "{} should redirect", route.path());
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_logout_then_protected_route_redirects() {
    let backend = StubBackend::start().await;
    stub_overview(&backend);
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session.clone(), Route::Root);
    assert_eq!(nav.current(), Route::Dashboard);

    assert_eq!(nav.logout(), Route::Login);
    assert_eq!(session.get_credential(), None);

    backend.clear();
    let page = visit(&mut nav, &api, Route::Profile).await;
    assert_eq!(page.route(), Route::Login);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_every_call_site_sends_bearer_header() {
    let backend = StubBackend::start().await;
    let api = backend.client(authed("abc"));

    let endpoints = Endpoint::all_samples();
    for endpoint in &endpoints {
        api.request(&endpoint.descriptor().unwrap()).await.unwrap();
    }

    let requests = backend.requests();
    assert_eq!(requests.len(), endpoints.len());
    for request in &requests {
        assert_eq!(
            request.authorization.as_deref(),
            Some("Bearer abc"),
            "{} {}",
            request.method,
            request.path
        );
    }
}

#[tokio::test]
async fn test_no_authorization_header_without_credential() {
    let backend = StubBackend::start().await;
    let api = backend.client(Session::in_memory());

    for endpoint in Endpoint::all_samples() {
        api.request(&endpoint.descriptor().unwrap()).await.unwrap();
    }
    assert!(backend.requests().iter().all(|r| r.authorization.is_none()));
}

#[tokio::test]
async fn test_mini_test_submission_renders_result() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/mini_test",
        200,
        json!({"questions": [
            {"id": 1, "prompt": "2+2?", "choices": ["A", "B"], "answer": "B"}
        ]}),
    );
    backend.respond(
        "POST",
        "/mini_test",
        200,
        json!({"total": 1, "correct": 0, "details": [
            {"id": "1", "correct_answer": "B", "your_answer": null,
             "correct": false, "explanation": null}
        ]}),
    );
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    let mut page = visit(&mut nav, &api, Route::MiniTest).await;
    let PageState::MiniTest(mini_test) = &mut page else {
        panic!("expected mini test");
    };
    assert_eq!(mini_test.questions.len(), 1);
    let command = mini_test.submit().unwrap();
    page.execute(command, &api).await;

    let PageState::MiniTest(mini_test) = &page else {
        unreachable!();
    };
    assert_eq!(mini_test.summary().as_deref(), Some("0/1"));
    let rows = mini_test.result_rows();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].correct);
    assert_eq!(rows[0].mark, i18n::INCORRECT);
    assert_eq!(rows[0].your_answer, "-");
    assert_eq!(rows[0].explanation, "-");

    let submitted = backend
        .requests()
        .into_iter()
        .find(|r| r.method == "POST" && r.path == "/mini_test")
        .unwrap();
    assert_eq!(
        submitted.body,
        Some(json!({"answers": [{"id": 1, "answer": ""}]}))
    );
}

#[tokio::test]
async fn test_empty_ai_questionnaire_falls_back_to_static_form() {
    let backend = StubBackend::start().await;
    backend.respond("GET", "/questionnaire_ai", 200, json!([]));
    backend.respond("POST", "/questionnaire", 200, json!({"message": "ok"}));
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Exams);

    let mut page = visit(&mut nav, &api, Route::Questionnaire).await;
    let PageState::Questionnaire(questionnaire) = &mut page else {
        panic!("expected questionnaire");
    };
    let Some(QuestionnaireForm::Static(form)) = &mut questionnaire.form else {
        panic!("expected the fixed form");
    };
    form.daily_hours = "2".to_string();
    form.difficult_topics = "limit, türev".to_string();

    let command = questionnaire.submit().unwrap();
    assert!(matches!(command, Command::SubmitStaticQuestionnaire(_)));
    let next = page.execute(command, &api).await;
    assert_eq!(next, Some(Route::MiniTest));

    let submitted = backend.requests().pop().unwrap();
    assert_eq!(submitted.path, "/questionnaire");
    assert_eq!(
        submitted.body,
        Some(json!({"daily_hours": 2, "difficult_topics": ["limit", "türev"]}))
    );
}

#[tokio::test]
async fn test_failed_or_null_ai_questionnaire_falls_back() {
    let backend = StubBackend::start().await;
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    backend.respond_empty("GET", "/questionnaire_ai", 200);
    let page = visit(&mut nav, &api, Route::Questionnaire).await;
    let PageState::Questionnaire(questionnaire) = &page else {
        panic!("expected questionnaire");
    };
    assert!(!questionnaire.is_dynamic());
    assert!(questionnaire.form.is_some());

    backend.respond_raw("GET", "/questionnaire_ai", 500, "Internal Server Error");
    let page = visit(&mut nav, &api, Route::Questionnaire).await;
    let PageState::Questionnaire(questionnaire) = &page else {
        panic!("expected questionnaire");
    };
    assert!(!questionnaire.is_dynamic());
    assert!(questionnaire.error.is_none());
}

#[tokio::test]
async fn test_dynamic_questionnaire_submission() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/questionnaire_ai",
        200,
        json!([
            {"id": 1, "question": "Stil?", "type": "choice", "options": ["görsel", "işitsel"]},
            {"id": 2, "question": "Saat?", "type": "number"}
        ]),
    );
    backend.respond_empty("POST", "/questionnaire_ai", 204);
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    let mut page = visit(&mut nav, &api, Route::Questionnaire).await;
    let PageState::Questionnaire(questionnaire) = &mut page else {
        panic!("expected questionnaire");
    };
    assert!(questionnaire.is_dynamic());
    questionnaire.type_char(' ');
    let command = questionnaire.submit().unwrap();
    assert_eq!(page.execute(command, &api).await, Some(Route::MiniTest));

    let submitted = backend.requests().pop().unwrap();
    assert_eq!(
        submitted.body,
        Some(json!({"answers": [{"id": 1, "answer": "görsel"}, {"id": 2, "answer": ""}]}))
    );
}

#[tokio::test]
async fn test_deleting_plan_removes_entry_and_current_plan() {
    let backend = StubBackend::start().await;
    let plan = |id: i64, week: &str| {
        json!({"id": id, "week_start": week, "subjects": [
            {"day": "Pazartesi", "topic": "Limit", "duration": 2}
        ], "tests": null})
    };
    backend.respond("GET", "/plans", 200, json!([plan(5, "2024-04-29")]));
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    let mut page = visit(&mut nav, &api, Route::WeeklyPlan).await;

    backend.respond("GET", "/weekly_plan", 200, plan(7, "2024-05-06"));
    backend.respond(
        "GET",
        "/plans",
        200,
        json!([plan(5, "2024-04-29"), plan(7, "2024-05-06")]),
    );
    let PageState::WeeklyPlan(plans) = &mut page else {
        panic!("expected weekly plan");
    };
    let command = plans.create().unwrap();
    page.execute(command, &api).await;

    backend.respond_empty("DELETE", "/plans/7", 204);
    let PageState::WeeklyPlan(plans) = &mut page else {
        unreachable!();
    };
    assert_eq!(plans.plans.len(), 2);
    assert!(plans.current.as_ref().is_some_and(|p| p.has_id(7)));
    let command = plans.delete(7).unwrap();
    page.execute(command, &api).await;

    let PageState::WeeklyPlan(plans) = &page else {
        unreachable!();
    };
    let ids: Vec<_> = plans.plans.iter().filter_map(|p| p.id).collect();
    assert_eq!(ids, vec![5]);
    assert!(plans.current.is_none());
    assert!(plans.error.is_none());
    assert_eq!(
        backend.paths(),
        vec!["GET /plans", "GET /weekly_plan", "GET /plans", "DELETE /plans/7"]
    );
}

#[tokio::test]
async fn test_error_detail_and_fallbacks() {
    let backend = StubBackend::start().await;
    let session = Session::in_memory();
    let api = backend.client(session.clone());

    let login = |page: &mut PageState| {
        let PageState::Login(login) = page else {
            panic!("expected login page");
        };
        login.form.email = "a@b.c".to_string();
        login.form.password = "wrong".to_string();
        login.submit().unwrap()
    };
    let error = |page: &PageState| match page {
        PageState::Login(login) => login.error.clone(),
        _ => None,
    };

    backend.respond(
        "POST",
        "/token",
        401,
        json!({"detail": "Incorrect email or password"}),
    );
    let mut page = PageState::for_route(Route::Login).unwrap();
    let command = login(&mut page);
    assert_eq!(page.execute(command, &api).await, None);
    assert_eq!(error(&page).as_deref(), Some("Incorrect email or password"));

    backend.respond(
        "POST",
        "/token",
        422,
        json!({"detail": [{"loc": ["body", "email"], "msg": "field required"}]}),
    );
    let command = login(&mut page);
    page.execute(command, &api).await;
    assert_eq!(error(&page).as_deref(), Some(i18n::LOGIN_FAILED));

    backend.respond_raw("POST", "/token", 502, "<html>Bad Gateway</html>");
    let command = login(&mut page);
    page.execute(command, &api).await;
    assert_eq!(error(&page).as_deref(), Some(i18n::LOGIN_FAILED));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_transport_failure_uses_fallback() {
    // Nothing listens on the discard port
    let api = ApiClient::new("http://127.0.0.1:9", authed("abc")).unwrap();
    let mut page = PageState::for_route(Route::Exams).unwrap();
    let command = page.on_enter().unwrap();
    page.execute(command, &api).await;

    let PageState::Exams(exams) = &page else {
        panic!("expected exams page");
    };
    assert!(!exams.loading);
    assert_eq!(exams.error.as_deref(), Some(i18n::EXAMS_LOAD_FAILED));
}

#[tokio::test]
async fn test_overview_fails_when_any_load_fails() {
    let backend = StubBackend::start().await;
    stub_overview(&backend);
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    let page = visit(&mut nav, &api, Route::Profile).await;
    let PageState::Profile(profile) = &page else {
        panic!("expected profile");
    };
    assert!(profile.data.is_some());
    let history = backend
        .requests()
        .into_iter()
        .find(|r| r.path == "/ai_history")
        .expect("profile should load its AI history");
    assert_eq!(history.query.as_deref(), Some("limit=10"));

    backend.respond(
        "GET",
        "/progress",
        500,
        json!({"detail": "progress table missing"}),
    );
    let page = visit(&mut nav, &api, Route::Profile).await;
    let PageState::Profile(profile) = &page else {
        panic!("expected profile");
    };
    assert!(profile.data.is_none());
    assert_eq!(profile.error.as_deref(), Some(i18n::PROFILE_LOAD_FAILED));
}

#[tokio::test]
async fn test_plan_list_failures_use_load_message() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/plans",
        500,
        json!({"detail": "database unavailable"}),
    );
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    let mut page = visit(&mut nav, &api, Route::WeeklyPlan).await;
    let PageState::WeeklyPlan(plans) = &mut page else {
        panic!("expected weekly plan");
    };
    assert_eq!(plans.error.as_deref(), Some(i18n::PLANS_LOAD_FAILED));

    // The plan is generated but the list reload still fails
    backend.respond(
        "GET",
        "/weekly_plan",
        200,
        json!({"id": 7, "week_start": "2024-05-06", "subjects": [], "tests": null}),
    );
    let command = plans.create().unwrap();
    page.execute(command, &api).await;

    let PageState::WeeklyPlan(plans) = &page else {
        unreachable!();
    };
    assert!(plans.current.as_ref().is_some_and(|p| p.has_id(7)));
    assert_eq!(plans.error.as_deref(), Some(i18n::PLANS_LOAD_FAILED));
    assert_eq!(
        backend.paths(),
        vec!["GET /plans", "GET /weekly_plan", "GET /plans"]
    );
}

#[tokio::test]
async fn test_exam_selection_ack_navigates_to_questionnaire() {
    let backend = StubBackend::start().await;
    backend.respond(
        "GET",
        "/exams",
        200,
        json!([{"id": 1, "name": "YKS"}, {"id": 2, "name": "KPSS"}]),
    );
    backend.respond("POST", "/select_exam", 200, json!({"message": "Exam selected"}));
    let session = authed("abc");
    let api = backend.client(session.clone());
    let mut nav = Navigator::new(session, Route::Dashboard);

    let mut page = visit(&mut nav, &api, Route::Exams).await;
    let PageState::Exams(exams) = &mut page else {
        panic!("expected exams page");
    };
    assert!(exams.submit().is_none());
    assert_eq!(exams.error.as_deref(), Some(i18n::EXAM_NOT_SELECTED));

    exams.move_down();
    exams.select_current();
    let command = exams.submit().unwrap();
    assert_eq!(page.execute(command, &api).await, Some(Route::Questionnaire));

    let selected = backend.requests().pop().unwrap();
    assert_eq!(selected.body, Some(json!({"exam_id": 2})));
    assert_eq!(backend.paths(), vec!["GET /exams", "POST /select_exam"]);
}

#[tokio::test]
async fn test_chat_round_trip() {
    let backend = StubBackend::start().await;
    backend.respond("POST", "/chat", 200, json!({"reply": "Limit, bir fonksiyonun yaklaştığı değerdir."}));
    let session = authed("abc");
    let api = backend.client(session);

    let mut page = PageState::for_route(Route::Chat).unwrap();
    let PageState::Chat(chat) = &mut page else {
        panic!("expected chat");
    };
    for c in "  limit nedir?  ".chars() {
        chat.type_char(c);
    }
    let command = chat.send().unwrap();
    page.execute(command, &api).await;

    let PageState::Chat(chat) = &page else {
        unreachable!();
    };
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].text, "limit nedir?");
    assert_eq!(chat.messages[1].text, "Limit, bir fonksiyonun yaklaştığı değerdir.");
    assert_eq!(
        backend.requests()[0].body,
        Some(json!({"message": "limit nedir?"}))
    );
}
