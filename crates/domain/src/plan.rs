use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Scalar, SchemaError};

/// Scheduled activities per day of week.
pub type Schedule = BTreeMap<String, Vec<String>>;

/// Weekly schedule of a phase. Two variants occur in the data: one row per
/// week (`weeks`) and a single horizontal day row (`schedule`). `days`
/// defines the column order; a day absent from a schedule is an empty cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<String>,
    pub weeks: Option<Vec<WeekRow>>,
    pub schedule: Option<Schedule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeekRow {
    pub week: Scalar,
    pub schedule: Schedule,
}

/// Render-ready description of a weekly-schedule grid. The header row of the
/// grid is carried in `columns`, the label column of each body row in
/// `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub columns: Vec<String>,
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub label: String,
    pub cells: Vec<String>,
}

impl WeeklyPlan {
    pub fn normalize(&self) -> Result<Grid, SchemaError> {
        if let Some(weeks) = &self.weeks {
            Ok(Grid {
                columns: columns("Week", &self.days),
                rows: weeks
                    .iter()
                    .map(|week| GridRow {
                        label: week.week.to_string(),
                        cells: self.day_cells(&week.schedule),
                    })
                    .collect(),
            })
        } else if let Some(schedule) = &self.schedule {
            Ok(Grid {
                columns: columns("Day", &self.days),
                rows: vec![GridRow {
                    label: "Activities".to_string(),
                    cells: self.day_cells(schedule),
                }],
            })
        } else {
            Err(SchemaError::NoSchedule)
        }
    }

    fn day_cells(&self, schedule: &Schedule) -> Vec<String> {
        self.days
            .iter()
            .map(|day| {
                schedule
                    .get(day)
                    .map(|activities| activities.join("\n"))
                    .unwrap_or_default()
            })
            .collect()
    }
}

fn columns(label: &str, days: &[String]) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(days.iter().cloned())
        .collect()
}
