use serde::Deserialize;

use crate::{
    Exercise, SchemaError, Table,
    exercise::{MISSING, name_cell, normalize_exercises, scalar_or_missing, to_columns},
};

/// Categories with this exact name use a fixed interval-training layout
/// taken from named fields instead of shape detection.
pub const INTERVAL_CATEGORY: &str = "Energy System Development";

const INTERVAL_COLUMNS: [&str; 5] = [
    "Name",
    "Description",
    "Work Interval",
    "Rest Interval",
    "Total Time",
];

/// One exercise category of a phase document. Either `exercises` or
/// `details` carries the effective list; `subcategories` adds one optional
/// nesting level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExerciseCategory {
    pub category: String,
    pub exercises: Option<Vec<Exercise>>,
    pub details: Option<Vec<Exercise>>,
    pub subcategories: Option<Vec<Subcategory>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subcategory {
    pub subcategory: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub heading: String,
    pub table: Option<Table>,
    pub subcategories: Vec<SubcategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryView {
    pub heading: String,
    pub table: Table,
}

impl ExerciseCategory {
    pub fn normalize(&self) -> Result<CategoryView, SchemaError> {
        let list = self.exercises.as_deref().or(self.details.as_deref());
        let table = match list {
            Some(list) if self.category == INTERVAL_CATEGORY => Some(interval_table(list)?),
            Some(list) => Some(normalize_exercises(list)?),
            None => None,
        };
        let subcategories = self
            .subcategories
            .iter()
            .flatten()
            .map(|subcategory| {
                Ok(SubcategoryView {
                    heading: subcategory.subcategory.clone(),
                    table: normalize_exercises(&subcategory.exercises)?,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;
        if table.is_none() && subcategories.is_empty() {
            return Err(SchemaError::EmptyCategory(self.category.clone()));
        }
        Ok(CategoryView {
            heading: self.category.clone(),
            table,
            subcategories,
        })
    }
}

fn interval_table(exercises: &[Exercise]) -> Result<Table, SchemaError> {
    if exercises.is_empty() {
        return Err(SchemaError::EmptyExerciseList);
    }
    Ok(Table {
        columns: to_columns(&INTERVAL_COLUMNS),
        rows: exercises
            .iter()
            .map(|exercise| {
                vec![
                    name_cell(exercise),
                    exercise
                        .description
                        .clone()
                        .unwrap_or_else(|| MISSING.to_string()),
                    scalar_or_missing(exercise.work_interval.as_ref()),
                    scalar_or_missing(exercise.rest_interval.as_ref()),
                    scalar_or_missing(exercise.total_time.as_ref()),
                ]
            })
            .collect(),
    })
}
