use serde::Deserialize;

use crate::{CategoryView, ExerciseCategory, Grid, SchemaError, WeeklyPlan};

/// One multi-week block of the training program.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhaseDocument {
    pub phase: String,
    pub goal: String,
    pub weekly_plan: WeeklyPlan,
    // The key name varies between the phase documents.
    #[serde(alias = "exercises")]
    pub exercise_categories: Vec<ExerciseCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseView {
    pub title: String,
    pub goal: String,
    pub weekly_plan: Grid,
    pub categories: Vec<CategoryView>,
}

impl PhaseDocument {
    pub fn normalize(&self) -> Result<PhaseView, SchemaError> {
        Ok(PhaseView {
            title: self.phase.clone(),
            goal: self.goal.clone(),
            weekly_plan: self.weekly_plan.normalize()?,
            categories: self
                .exercise_categories
                .iter()
                .map(ExerciseCategory::normalize)
                .collect::<Result<_, _>>()?,
        })
    }
}
