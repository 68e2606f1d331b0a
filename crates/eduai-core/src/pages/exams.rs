//! Exam selection.

use tracing::{debug, warn};

use super::Command;
use crate::api::ApiError;
use crate::i18n;
use crate::models::Exam;
use crate::routes::Route;

#[derive(Debug, Default)]
pub struct ExamSelectionPage {
    pub exams: Vec<Exam>,
    /// Id of the exam the user picked.
    pub selected: Option<i64>,
    /// Highlighted row.
    pub cursor: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl ExamSelectionPage {
    pub fn on_enter(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::LoadExams
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<Exam>, ApiError>) {
        self.loading = false;
        match result {
            Ok(exams) => {
                debug!(count = exams.len(), "Exams loaded");
                self.exams = exams;
                self.cursor = 0;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load exams");
                self.error = Some(i18n::EXAMS_LOAD_FAILED.to_string());
            }
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.exams.len() {
            self.cursor += 1;
        }
    }

    /// Pick the highlighted exam.
    pub fn select_current(&mut self) {
        if let Some(exam) = self.exams.get(self.cursor) {
            self.selected = Some(exam.id);
        }
    }

    pub fn is_selected(&self, exam: &Exam) -> bool {
        self.selected == Some(exam.id)
    }

    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        match self.selected {
            Some(id) => {
                self.error = None;
                self.loading = true;
                Some(Command::SelectExam(id))
            }
            None => {
                self.error = Some(i18n::EXAM_NOT_SELECTED.to_string());
                None
            }
        }
    }

    pub fn apply_selected(&mut self, result: Result<(), ApiError>) -> Option<Route> {
        self.loading = false;
        match result {
            Ok(()) => Some(Route::Questionnaire),
            Err(e) => {
                self.error = Some(e.user_message(i18n::EXAM_SELECT_FAILED));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn exams() -> Vec<Exam> {
        vec![
            Exam {
                id: 1,
                name: "YKS".to_string(),
            },
            Exam {
                id: 2,
                name: "LGS".to_string(),
            },
        ]
    }

    #[test]
    fn test_submit_without_selection() {
        let mut page = ExamSelectionPage::default();
        page.apply_loaded(Ok(exams()));
        assert!(page.submit().is_none());
        assert_eq!(page.error.as_deref(), Some(i18n::EXAM_NOT_SELECTED));
    }

    #[test]
    fn test_select_and_submit() {
        let mut page = ExamSelectionPage::default();
        assert!(matches!(page.on_enter(), Command::LoadExams));
        assert!(page.loading);
        page.apply_loaded(Ok(exams()));

        page.move_down();
        page.move_down();
        assert_eq!(page.cursor, 1);
        page.select_current();
        assert!(page.is_selected(&page.exams[1]));

        assert!(matches!(page.submit(), Some(Command::SelectExam(2))));
        assert_eq!(page.apply_selected(Ok(())), Some(Route::Questionnaire));
    }

    #[test]
    fn test_load_failure() {
        let mut page = ExamSelectionPage::default();
        page.on_enter();
        page.apply_loaded(Err(ApiError::InvalidResponse("boom".to_string())));
        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some(i18n::EXAMS_LOAD_FAILED));
    }

    #[test]
    fn test_load_failure_ignores_detail() {
        let mut page = ExamSelectionPage::default();
        page.on_enter();
        page.apply_loaded(Err(ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({"detail": "exam table missing"}),
        }));
        assert_eq!(page.error.as_deref(), Some(i18n::EXAMS_LOAD_FAILED));
    }

    #[test]
    fn test_select_failure_shows_detail() {
        let mut page = ExamSelectionPage::default();
        page.apply_loaded(Ok(exams()));
        page.select_current();
        page.submit();
        let nav = page.apply_selected(Err(ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: json!({"detail": "Exam not found"}),
        }));
        assert_eq!(nav, None);
        assert_eq!(page.error.as_deref(), Some("Exam not found"));
    }
}
