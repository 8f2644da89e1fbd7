use std::collections::BTreeMap;

use trainplan_domain as domain;

/// Key under which the navigation manifest is stored.
pub const MANIFEST: &str = "pages";

/// Document store holding the raw JSON texts of a site bundle, keyed by page
/// name. Suitable for hosts that ship their data with the binary and for
/// tests; documents are parsed on every read, so a later navigation is
/// unaffected by an earlier failure.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    documents: BTreeMap<String, String>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, page: &str, document: &str) {
        self.documents.insert(page.to_string(), document.to_string());
    }

    fn read(&self, page: &str) -> Result<serde_json::Value, domain::StorageError> {
        let document = self
            .documents
            .get(page)
            .ok_or_else(|| domain::StorageError::NotFound(page.to_string()))?;
        serde_json::from_str(document).map_err(|err| domain::StorageError::Other(err.to_string()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Memory {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            documents: iter
                .into_iter()
                .map(|(page, document)| (page.to_string(), document.to_string()))
                .collect(),
        }
    }
}

impl domain::DocumentRepository for Memory {
    async fn read_manifest(&self) -> Result<serde_json::Value, domain::StorageError> {
        self.read(MANIFEST)
    }

    async fn read_document(&self, page: &str) -> Result<serde_json::Value, domain::StorageError> {
        self.read(page)
    }
}
