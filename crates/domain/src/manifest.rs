use derive_more::Deref;
use serde::Deserialize;
use serde_json::Value;

use crate::SchemaError;

/// One navigation entry: either a leaf page (fetched by `page` name or
/// carrying inline `content`) or a submenu container. Submenus nest exactly
/// one level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageManifestEntry {
    pub name: String,
    pub page: String,
    pub content: Option<String>,
    pub submenu: Option<Vec<PageManifestEntry>>,
}

impl PageManifestEntry {
    #[must_use]
    pub fn is_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.content.is_some() && self.submenu.is_some() {
            return Err(SchemaError::AmbiguousManifestEntry(self.name.clone()));
        }
        for entry in self.submenu.iter().flatten() {
            if entry.submenu.is_some() {
                return Err(SchemaError::NestedSubmenu(entry.name.clone()));
            }
        }
        Ok(())
    }
}

/// Ordered navigation entries, validated on construction.
#[derive(Deref, Debug, Clone, PartialEq)]
pub struct Manifest(Vec<PageManifestEntry>);

impl Manifest {
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let entries: Vec<PageManifestEntry> =
            serde_json::from_value(value).map_err(|err| SchemaError::Malformed(err.to_string()))?;
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self(entries))
    }
}
