//! Weekly plans: generate, browse and delete.

use tracing::{debug, info, warn};

use super::Command;
use crate::api::ApiError;
use crate::i18n;
use crate::models::WeeklyPlan;

#[derive(Debug, Default)]
pub struct WeeklyPlanPage {
    /// The most recently generated plan.
    pub current: Option<WeeklyPlan>,
    pub plans: Vec<WeeklyPlan>,
    /// Highlighted row in `plans`.
    pub cursor: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl WeeklyPlanPage {
    pub fn on_enter(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::LoadPlans
    }

    pub fn apply_plans(&mut self, result: Result<Vec<WeeklyPlan>, ApiError>) {
        self.loading = false;
        match result {
            Ok(plans) => self.set_plans(plans),
            Err(e) => self.plans_failed(&e),
        }
    }

    fn set_plans(&mut self, plans: Vec<WeeklyPlan>) {
        debug!(count = plans.len(), "Plans loaded");
        self.plans = plans;
        self.clamp_cursor();
    }

    // The list reload never reads `detail`, even after a create
    fn plans_failed(&mut self, e: &ApiError) {
        warn!(error = %e, "Failed to load plans");
        self.error = Some(i18n::PLANS_LOAD_FAILED.to_string());
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.plans.len().saturating_sub(1));
    }

    pub fn create(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Command::CreatePlan)
    }

    pub fn apply_created(
        &mut self,
        plan: Result<WeeklyPlan, ApiError>,
        plans: Option<Result<Vec<WeeklyPlan>, ApiError>>,
    ) {
        self.loading = false;
        match plan {
            Ok(plan) => {
                info!(week_start = %plan.week_start, "Weekly plan generated");
                self.current = Some(plan);
            }
            Err(e) => {
                self.error = Some(e.user_message(i18n::PLAN_CREATE_FAILED));
                return;
            }
        }
        match plans {
            Some(Ok(plans)) => self.set_plans(plans),
            Some(Err(e)) => self.plans_failed(&e),
            None => {}
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.plans.len() {
            self.cursor += 1;
        }
    }

    pub fn selected(&self) -> Option<&WeeklyPlan> {
        self.plans.get(self.cursor)
    }

    /// Delete the highlighted plan.
    pub fn delete_selected(&mut self) -> Option<Command> {
        let id = self.selected()?.id?;
        self.delete(id)
    }

    pub fn delete(&mut self, id: i64) -> Option<Command> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Command::DeletePlan(id))
    }

    pub fn apply_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        self.loading = false;
        match result {
            Ok(()) => {
                info!(id, "Weekly plan deleted");
                self.plans.retain(|p| !p.has_id(id));
                if self.current.as_ref().is_some_and(|p| p.has_id(id)) {
                    self.current = None;
                }
                self.clamp_cursor();
            }
            Err(e) => self.error = Some(e.user_message(i18n::PLAN_DELETE_FAILED)),
        }
    }
}
