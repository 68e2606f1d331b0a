//! Learning questionnaire.
//!
//! The page first asks the backend for a generated questionnaire. When one
//! comes back non-empty it is shown as a dynamic form; otherwise, including
//! on any load failure, the fixed three-field form is shown instead.

use tracing::{debug, info};

use super::{push_char, Command, MAX_INPUT_LENGTH};
use crate::api::ApiError;
use crate::i18n;
use crate::models::{Answer, DynamicQuestion, LearningStyle, QuestionKind, StaticQuestionnaire};
use crate::routes::Route;
use crate::utils::split_topics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaticField {
    #[default]
    LearningStyle,
    DailyHours,
    DifficultTopics,
}

impl StaticField {
    pub fn next(self) -> Self {
        match self {
            StaticField::LearningStyle => StaticField::DailyHours,
            StaticField::DailyHours => StaticField::DifficultTopics,
            StaticField::DifficultTopics => StaticField::LearningStyle,
        }
    }
}

/// The fixed questionnaire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticForm {
    pub learning_style: Option<LearningStyle>,
    pub daily_hours: String,
    /// Comma-separated.
    pub difficult_topics: String,
    pub focus: StaticField,
}

impl StaticForm {
    /// Build the request body. Unset or unparseable fields are left out.
    pub fn to_payload(&self) -> StaticQuestionnaire {
        let daily_hours = match self.daily_hours.trim() {
            "" => None,
            hours => hours.parse::<i64>().ok(),
        };
        let topics = split_topics(&self.difficult_topics);
        StaticQuestionnaire {
            learning_style: self.learning_style.map(|s| s.as_str().to_string()),
            daily_hours,
            difficult_topics: if topics.is_empty() { None } else { Some(topics) },
        }
    }

    /// Step the learning style through unset and each style.
    pub fn cycle_learning_style(&mut self) {
        self.learning_style = match self.learning_style {
            None => Some(LearningStyle::ALL[0]),
            Some(current) => LearningStyle::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|i| LearningStyle::ALL.get(i + 1))
                .copied(),
        };
    }

    fn type_char(&mut self, c: char) {
        match self.focus {
            StaticField::LearningStyle => {
                if c == ' ' {
                    self.cycle_learning_style();
                }
            }
            StaticField::DailyHours => {
                if c.is_ascii_digit() {
                    push_char(&mut self.daily_hours, 2, c);
                }
            }
            StaticField::DifficultTopics => {
                push_char(&mut self.difficult_topics, MAX_INPUT_LENGTH, c)
            }
        }
    }

    fn backspace(&mut self) {
        match self.focus {
            StaticField::LearningStyle => self.learning_style = None,
            StaticField::DailyHours => {
                self.daily_hours.pop();
            }
            StaticField::DifficultTopics => {
                self.difficult_topics.pop();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireForm {
    Dynamic {
        questions: Vec<DynamicQuestion>,
        /// One answer per question, in order.
        answers: Vec<String>,
        cursor: usize,
    },
    Static(StaticForm),
}

#[derive(Debug, Default)]
pub struct QuestionnairePage {
    /// `None` until the generated questionnaire has been asked for.
    pub form: Option<QuestionnaireForm>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QuestionnairePage {
    pub fn on_enter(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::LoadQuestionnaire
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<DynamicQuestion>, ApiError>) {
        self.loading = false;
        self.form = Some(match result {
            Ok(questions) if !questions.is_empty() => {
                debug!(count = questions.len(), "Using generated questionnaire");
                let answers = vec![String::new(); questions.len()];
                QuestionnaireForm::Dynamic {
                    questions,
                    answers,
                    cursor: 0,
                }
            }
            Ok(_) => {
                debug!("Generated questionnaire is empty, using the fixed form");
                QuestionnaireForm::Static(StaticForm::default())
            }
            Err(e) => {
                debug!(error = %e, "Generated questionnaire unavailable, using the fixed form");
                QuestionnaireForm::Static(StaticForm::default())
            }
        });
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.form, Some(QuestionnaireForm::Dynamic { .. }))
    }

    /// Move focus to the next question or field.
    pub fn next_field(&mut self) {
        match &mut self.form {
            Some(QuestionnaireForm::Dynamic {
                questions, cursor, ..
            }) => {
                if !questions.is_empty() {
                    *cursor = (*cursor + 1) % questions.len();
                }
            }
            Some(QuestionnaireForm::Static(form)) => form.focus = form.focus.next(),
            None => {}
        }
    }

    pub fn prev_field(&mut self) {
        match &mut self.form {
            Some(QuestionnaireForm::Dynamic {
                questions, cursor, ..
            }) => {
                if !questions.is_empty() {
                    *cursor = (*cursor + questions.len() - 1) % questions.len();
                }
            }
            Some(QuestionnaireForm::Static(form)) => {
                form.focus = form.focus.next().next();
            }
            None => {}
        }
    }

    /// Choice questions cycle through their options; other kinds take text.
    pub fn type_char(&mut self, c: char) {
        match &mut self.form {
            Some(QuestionnaireForm::Dynamic {
                questions,
                answers,
                cursor,
            }) => {
                let (Some(question), Some(answer)) = (questions.get(*cursor), answers.get_mut(*cursor))
                else {
                    return;
                };
                match &question.kind {
                    QuestionKind::Choice { options } => {
                        if c == ' ' {
                            *answer = next_option(options, answer);
                        }
                    }
                    QuestionKind::Number => {
                        if c.is_ascii_digit() || (c == '.' && !answer.contains('.')) {
                            push_char(answer, MAX_INPUT_LENGTH, c);
                        }
                    }
                    QuestionKind::Text => push_char(answer, MAX_INPUT_LENGTH, c),
                }
            }
            Some(QuestionnaireForm::Static(form)) => form.type_char(c),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        match &mut self.form {
            Some(QuestionnaireForm::Dynamic {
                questions,
                answers,
                cursor,
            }) => {
                if let (Some(question), Some(answer)) = (questions.get(*cursor), answers.get_mut(*cursor)) {
                    match question.kind {
                        QuestionKind::Choice { .. } => answer.clear(),
                        _ => {
                            answer.pop();
                        }
                    }
                }
            }
            Some(QuestionnaireForm::Static(form)) => form.backspace(),
            None => {}
        }
    }

    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        let command = match self.form.as_ref()? {
            QuestionnaireForm::Dynamic {
                questions, answers, ..
            } => {
                let answers = questions
                    .iter()
                    .zip(answers.iter())
                    .map(|(q, a)| Answer::new(q.id.clone(), a.clone()))
                    .collect();
                Command::SubmitDynamicQuestionnaire(answers)
            }
            QuestionnaireForm::Static(form) => Command::SubmitStaticQuestionnaire(form.to_payload()),
        };
        self.error = None;
        self.loading = true;
        Some(command)
    }

    pub fn apply_submitted(&mut self, result: Result<(), ApiError>) -> Option<Route> {
        self.loading = false;
        match result {
            Ok(()) => {
                info!("Questionnaire submitted");
                Some(Route::MiniTest)
            }
            Err(e) => {
                self.error = Some(e.user_message(i18n::QUESTIONNAIRE_SUBMIT_FAILED));
                None
            }
        }
    }
}

fn next_option(options: &[String], current: &str) -> String {
    let next = match options.iter().position(|o| o == current) {
        Some(i) => options.get(i + 1),
        None => options.first(),
    };
    next.cloned().unwrap_or_default()
}
