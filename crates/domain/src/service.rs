use log::{debug, error};

use crate::{
    ContentView, Document, Manifest, PageManifestEntry, ReadError, SchemaError, StorageError,
};

#[allow(async_fn_in_trait)]
pub trait DocumentRepository {
    async fn read_manifest(&self) -> Result<serde_json::Value, StorageError>;
    async fn read_document(&self, page: &str) -> Result<serde_json::Value, StorageError>;
}

pub struct Service<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($result:expr, $action:literal, $entity:expr) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: DocumentRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn manifest(&self) -> Result<Manifest, ReadError> {
        log_on_error!(self.load_manifest().await, "load", "manifest")
    }

    /// Loads and normalizes the document behind a manifest entry. Entries
    /// carrying inline content become a view without a document lookup.
    pub async fn content(&self, entry: &PageManifestEntry) -> Result<ContentView, ReadError> {
        log_on_error!(self.load_content(entry).await, "load page", entry.page)
    }

    async fn load_manifest(&self) -> Result<Manifest, ReadError> {
        let value = self.repository.read_manifest().await?;
        Ok(Manifest::from_value(value)?)
    }

    async fn load_content(&self, entry: &PageManifestEntry) -> Result<ContentView, ReadError> {
        if entry.is_submenu() {
            return Err(SchemaError::SubmenuEntry(entry.name.clone()).into());
        }
        if let Some(content) = &entry.content {
            return Ok(ContentView::Text(content.clone()));
        }
        let value = self.repository.read_document(&entry.page).await?;
        Ok(Document::from_value(value)?.normalize()?)
    }
}
