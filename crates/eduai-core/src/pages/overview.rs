//! Dashboard and profile.
//!
//! Both pages show the same three resources and differ only in how much
//! AI history they ask for and which fallback message they use.

use serde_json::Value;
use tracing::warn;

use super::Command;
use crate::api::{ApiClient, ApiError};
use crate::i18n;
use crate::models::{AiInteraction, Profile, ProfileQuestionnaire, ProgressRecord};
use crate::utils::{format_timestamp, truncate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewKind {
    Dashboard,
    Profile,
}

impl OverviewKind {
    pub fn history_limit(&self) -> u32 {
        match self {
            OverviewKind::Dashboard => 5,
            OverviewKind::Profile => 10,
        }
    }

    pub fn load_failed_message(&self) -> &'static str {
        match self {
            OverviewKind::Dashboard => i18n::DASHBOARD_LOAD_FAILED,
            OverviewKind::Profile => i18n::PROFILE_LOAD_FAILED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Overview {
    pub profile: Profile,
    pub progress: Vec<ProgressRecord>,
    pub history: Vec<AiInteraction>,
}

impl Overview {
    /// Fetch profile, progress and history concurrently. Fails on the first error.
    pub async fn fetch(api: &ApiClient, history_limit: u32) -> Result<Self, ApiError> {
        let (profile, progress, history) = futures::try_join!(
            api.get_profile(),
            api.get_progress(),
            api.get_ai_history(history_limit),
        )?;
        Ok(Self {
            profile,
            progress,
            history,
        })
    }

    /// Selected exams joined for display, `None` when there are none.
    pub fn exams_display(&self) -> Option<String> {
        if self.profile.exams.is_empty() {
            None
        } else {
            Some(self.profile.exams.join(", "))
        }
    }
}

#[derive(Debug)]
pub struct OverviewPage {
    pub kind: OverviewKind,
    pub data: Option<Overview>,
    pub loading: bool,
    pub error: Option<String>,
    pub scroll: u16,
}

impl OverviewPage {
    pub fn new(kind: OverviewKind) -> Self {
        Self {
            kind,
            data: None,
            loading: false,
            error: None,
            scroll: 0,
        }
    }

    pub fn on_enter(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::LoadOverview {
            history_limit: self.kind.history_limit(),
        }
    }

    pub fn apply_loaded(&mut self, result: Result<Overview, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => {
                warn!(error = %e, kind = ?self.kind, "Failed to load overview");
                self.error = Some(self.kind.load_failed_message().to_string());
            }
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

/// Display lines for a stored questionnaire.
pub fn questionnaire_lines(questionnaire: &ProfileQuestionnaire) -> Vec<String> {
    match questionnaire {
        ProfileQuestionnaire::Answers { answers } => answers
            .iter()
            .map(|a| format!("{}: {}", a.id, a.answer))
            .collect(),
        ProfileQuestionnaire::Static(q) => {
            let mut lines = Vec::new();
            if let Some(style) = &q.learning_style {
                lines.push(format!("Öğrenme stili: {}", style));
            }
            if let Some(hours) = q.daily_hours {
                lines.push(format!("Günlük çalışma: {} saat", hours));
            }
            if let Some(topics) = q.difficult_topics.as_ref().filter(|t| !t.is_empty()) {
                lines.push(format!("Zorlanılan konular: {}", topics.join(", ")));
            }
            lines
        }
        ProfileQuestionnaire::Other(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value_text(value)))
            .collect(),
        ProfileQuestionnaire::Other(value) => vec![value_text(value)],
    }
}

/// One-line summary of an AI interaction.
pub fn interaction_line(interaction: &AiInteraction) -> String {
    let content = interaction
        .content
        .as_ref()
        .map(value_text)
        .unwrap_or_default();
    format!(
        "{}  {}  {}",
        format_timestamp(&interaction.timestamp),
        interaction.interaction_type,
        truncate(&content, 60)
    )
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, StaticQuestionnaire};
    use serde_json::json;

    fn overview(exams: Vec<&str>) -> Overview {
        Overview {
            profile: Profile {
                id: Some(1),
                name: "Ayşe".to_string(),
                email: "a@b.c".to_string(),
                exams: exams.into_iter().map(str::to_string).collect(),
                questionnaire: None,
            },
            progress: vec![],
            history: vec![],
        }
    }

    #[test]
    fn test_history_limits() {
        let mut dashboard = OverviewPage::new(OverviewKind::Dashboard);
        let mut profile = OverviewPage::new(OverviewKind::Profile);
        assert!(matches!(
            dashboard.on_enter(),
            Command::LoadOverview { history_limit: 5 }
        ));
        assert!(matches!(
            profile.on_enter(),
            Command::LoadOverview { history_limit: 10 }
        ));
        assert!(dashboard.loading);
    }

    #[test]
    fn test_load_failure_fallbacks() {
        let mut dashboard = OverviewPage::new(OverviewKind::Dashboard);
        dashboard.apply_loaded(Err(ApiError::InvalidResponse("x".to_string())));
        assert_eq!(dashboard.error.as_deref(), Some(i18n::DASHBOARD_LOAD_FAILED));
        assert!(dashboard.data.is_none());

        let mut profile = OverviewPage::new(OverviewKind::Profile);
        profile.apply_loaded(Err(ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({"detail": "profile missing"}),
        }));
        assert_eq!(profile.error.as_deref(), Some(i18n::PROFILE_LOAD_FAILED));
    }

    #[test]
    fn test_exams_display() {
        assert_eq!(overview(vec![]).exams_display(), None);
        assert_eq!(
            overview(vec!["YKS", "ALES"]).exams_display().as_deref(),
            Some("YKS, ALES")
        );
    }

    #[test]
    fn test_questionnaire_lines() {
        let lines = questionnaire_lines(&ProfileQuestionnaire::Static(StaticQuestionnaire {
            learning_style: Some("visual".to_string()),
            daily_hours: Some(2),
            difficult_topics: Some(vec!["limit".to_string(), "türev".to_string()]),
        }));
        assert_eq!(
            lines,
            vec![
                "Öğrenme stili: visual",
                "Günlük çalışma: 2 saat",
                "Zorlanılan konular: limit, türev",
            ]
        );

        let lines = questionnaire_lines(&ProfileQuestionnaire::Answers {
            answers: vec![Answer::new(1, "evet")],
        });
        assert_eq!(lines, vec!["1: evet"]);

        let lines = questionnaire_lines(&ProfileQuestionnaire::Other(json!({"mood": "iyi", "n": 3})));
        assert_eq!(lines, vec!["mood: iyi", "n: 3"]);
    }

    #[test]
    fn test_interaction_line() {
        let interaction = AiInteraction {
            id: 1,
            interaction_type: "chat".to_string(),
            timestamp: "2024-05-06T09:30:00".to_string(),
            content: Some(json!("Limit nedir?")),
            result: None,
        };
        assert_eq!(
            interaction_line(&interaction),
            "06.05.2024 09:30:00  chat  Limit nedir?"
        );
    }
}
