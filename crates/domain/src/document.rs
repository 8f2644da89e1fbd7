use serde::Deserialize;
use serde_json::Value;

use crate::{EssentialsDocument, LevelView, PhaseDocument, PhaseView, SchemaError};

/// A page document in one of the known layouts, detected by its
/// distinguishing top-level key.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Phase(PhaseDocument),
    Essentials(EssentialsDocument),
}

/// Render-ready description of a page, free of any markup concerns.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    Phase(PhaseView),
    Essentials(Vec<LevelView>),
    Text(String),
}

impl Document {
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        if value.get("levels").is_some() {
            Ok(Self::Essentials(deserialize(value)?))
        } else if value.get("weekly_plan").is_some() {
            Ok(Self::Phase(deserialize(value)?))
        } else {
            Err(SchemaError::UnknownLayout)
        }
    }

    pub fn normalize(&self) -> Result<ContentView, SchemaError> {
        match self {
            Self::Phase(document) => Ok(ContentView::Phase(document.normalize()?)),
            Self::Essentials(document) => Ok(ContentView::Essentials(document.normalize())),
        }
    }
}

fn deserialize<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(|err| SchemaError::Malformed(err.to_string()))
}
