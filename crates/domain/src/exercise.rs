use derive_more::Display;
use serde::Deserialize;

use crate::SchemaError;

/// Placeholder for a field a row does not provide. Weekly-plan day cells and
/// trailing reps cells use the empty string instead (see `plan` and
/// [`RowShape::Reps`]); that asymmetry is part of the data's contract.
pub(crate) const MISSING: &str = "-";

/// A JSON value that is a string in some documents and a number in others.
#[derive(Debug, Clone, PartialEq, Display, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

/// One record of a phase or glossary document. The fields a record provides
/// vary between documents; which ones the *first* record of a list provides
/// determines the layout of the whole list (see [`RowShape`]).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Exercise {
    #[serde(alias = "name")]
    pub exercise: Option<String>,
    pub reps: Option<Vec<Scalar>>,
    pub sets: Option<Scalar>,
    pub week1: Option<Scalar>,
    pub week2_3: Option<Scalar>,
    pub description: Option<String>,
    pub work_interval: Option<Scalar>,
    pub rest_interval: Option<Scalar>,
    pub total_time: Option<Scalar>,
}

/// Render-ready description of a labeled exercise table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column layout of an exercise table, decided once from the first record of
/// a list and applied uniformly to every row. Mixed-shape lists are not
/// supported; normalizing one would force every row into the first row's
/// layout, and that is the intended behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    SetsReps,
    Reps(usize),
    Description,
    WeekSplit,
}

impl RowShape {
    #[must_use]
    pub fn of(exercise: &Exercise) -> Self {
        if exercise.sets.is_some() {
            Self::SetsReps
        } else if let Some(reps) = &exercise.reps {
            Self::Reps(reps.len())
        } else if exercise.description.is_some() {
            Self::Description
        } else {
            Self::WeekSplit
        }
    }

    fn columns(self) -> Vec<String> {
        match self {
            Self::SetsReps => to_columns(&["Exercise", "Sets", "Reps"]),
            Self::Reps(len) => std::iter::once("Exercise".to_string())
                .chain((1..=len).map(|week| format!("Week {week}")))
                .collect(),
            Self::Description => to_columns(&["Exercise", "Description"]),
            Self::WeekSplit => to_columns(&["Exercise", "Week 1", "Week 2 & 3"]),
        }
    }

    fn cells(self, exercise: &Exercise) -> Vec<String> {
        let mut cells = vec![name_cell(exercise)];
        match self {
            Self::SetsReps => {
                cells.push(scalar_or_missing(exercise.sets.as_ref()));
                cells.push(
                    exercise
                        .reps
                        .as_deref()
                        .map_or_else(|| MISSING.to_string(), |reps| join(reps, ", ")),
                );
            }
            Self::Reps(len) => {
                // Short rows leave trailing cells empty, long rows keep their
                // extra values.
                cells.extend(exercise.reps.iter().flatten().map(ToString::to_string));
                while cells.len() < len + 1 {
                    cells.push(String::new());
                }
            }
            Self::Description => {
                cells.push(
                    exercise
                        .description
                        .clone()
                        .unwrap_or_else(|| MISSING.to_string()),
                );
            }
            Self::WeekSplit => {
                cells.push(
                    exercise
                        .week1
                        .as_ref()
                        .map(ToString::to_string)
                        .or_else(|| exercise.description.clone())
                        .unwrap_or_else(|| MISSING.to_string()),
                );
                cells.push(scalar_or_missing(exercise.week2_3.as_ref()));
            }
        }
        cells
    }
}

pub fn normalize_exercises(exercises: &[Exercise]) -> Result<Table, SchemaError> {
    let Some(first) = exercises.first() else {
        return Err(SchemaError::EmptyExerciseList);
    };
    let shape = RowShape::of(first);
    Ok(Table {
        columns: shape.columns(),
        rows: exercises
            .iter()
            .map(|exercise| shape.cells(exercise))
            .collect(),
    })
}

pub(crate) fn name_cell(exercise: &Exercise) -> String {
    exercise
        .exercise
        .clone()
        .unwrap_or_else(|| MISSING.to_string())
}

pub(crate) fn scalar_or_missing(scalar: Option<&Scalar>) -> String {
    scalar.map_or_else(|| MISSING.to_string(), ToString::to_string)
}

pub(crate) fn to_columns(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| (*column).to_string()).collect()
}

fn join(values: &[Scalar], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
