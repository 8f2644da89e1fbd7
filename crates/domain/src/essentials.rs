use serde::Deserialize;

use crate::{
    Exercise, Table,
    exercise::{name_cell, to_columns},
};

/// Fixed column template of the exercise glossary. Sections are rendered
/// with four progression stages regardless of how many values a record
/// actually lists: missing stages are empty cells, extra values are dropped.
pub const STAGE_COLUMNS: [&str; 5] = ["Exercise", "Stage 1", "Stage 2", "Stage 3", "Stage 4"];

const STAGES: usize = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EssentialsDocument {
    pub levels: Vec<EssentialsLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EssentialsLevel {
    pub level: String,
    pub sections: Vec<EssentialsSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EssentialsSection {
    pub title: String,
    pub exercises: Option<Vec<Exercise>>,
    pub details: Option<Vec<Exercise>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelView {
    pub heading: String,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub heading: String,
    pub table: Table,
}

impl EssentialsDocument {
    #[must_use]
    pub fn normalize(&self) -> Vec<LevelView> {
        self.levels.iter().map(EssentialsLevel::normalize).collect()
    }
}

impl EssentialsLevel {
    #[must_use]
    pub fn normalize(&self) -> LevelView {
        LevelView {
            heading: self.level.clone(),
            sections: self
                .sections
                .iter()
                .map(EssentialsSection::normalize)
                .collect(),
        }
    }
}

impl EssentialsSection {
    #[must_use]
    pub fn normalize(&self) -> SectionView {
        SectionView {
            heading: self.title.clone(),
            table: Table {
                columns: to_columns(&STAGE_COLUMNS),
                rows: self
                    .exercises
                    .iter()
                    .flatten()
                    .chain(self.details.iter().flatten())
                    .map(stage_row)
                    .collect(),
            },
        }
    }
}

fn stage_row(exercise: &Exercise) -> Vec<String> {
    let reps = exercise.reps.as_deref().unwrap_or_default();
    std::iter::once(name_cell(exercise))
        .chain((0..STAGES).map(|stage| reps.get(stage).map(ToString::to_string).unwrap_or_default()))
        .collect()
}
