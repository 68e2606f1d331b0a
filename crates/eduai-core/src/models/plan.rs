use serde::{Deserialize, Serialize};

/// A generated week of study.
///
/// `GET /weekly_plan` answers without an `id`; entries from `GET /plans`
/// always carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    #[serde(default)]
    pub id: Option<i64>,
    pub week_start: String,
    #[serde(default)]
    pub subjects: Vec<PlanSubject>,
    #[serde(default)]
    pub tests: Option<Vec<PlanTest>>,
}

impl WeeklyPlan {
    /// Scheduled tests, empty when the plan has none.
    pub fn tests(&self) -> &[PlanTest] {
        self.tests.as_deref().unwrap_or(&[])
    }

    pub fn has_id(&self, id: i64) -> bool {
        self.id == Some(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSubject {
    pub day: String,
    pub topic: String,
    /// Hours
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTest {
    pub day: String,
    pub subject: String,
    pub num_questions: u32,
}
