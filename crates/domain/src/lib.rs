#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod category;
mod document;
mod error;
mod essentials;
mod exercise;
mod manifest;
mod phase;
mod plan;
mod service;

pub use category::{CategoryView, ExerciseCategory, INTERVAL_CATEGORY, Subcategory, SubcategoryView};
pub use document::{ContentView, Document};
pub use error::{ReadError, SchemaError, StorageError};
pub use essentials::{
    EssentialsDocument, EssentialsLevel, EssentialsSection, LevelView, STAGE_COLUMNS, SectionView,
};
pub use exercise::{Exercise, RowShape, Scalar, Table, normalize_exercises};
pub use manifest::{Manifest, PageManifestEntry};
pub use phase::{PhaseDocument, PhaseView};
pub use plan::{Grid, GridRow, Schedule, WeekRow, WeeklyPlan};
pub use service::{DocumentRepository, Service};
