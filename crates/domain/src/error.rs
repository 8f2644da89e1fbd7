#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("exercise list is empty")]
    EmptyExerciseList,
    #[error("weekly plan contains neither weeks nor a schedule")]
    NoSchedule,
    #[error("category '{0}' contains no exercises, details or subcategories")]
    EmptyCategory(String),
    #[error("manifest entry '{0}' has both inline content and a submenu")]
    AmbiguousManifestEntry(String),
    #[error("manifest entry '{0}' nests a submenu inside a submenu")]
    NestedSubmenu(String),
    #[error("manifest entry '{0}' is a submenu, not a page")]
    SubmenuEntry(String),
    #[error("document has no recognizable layout")]
    UnknownLayout,
    #[error("malformed document: {0}")]
    Malformed(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("document '{0}' not found")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
    }

    #[test]
    fn test_read_error_from_schema_error() {
        assert!(matches!(
            ReadError::from(SchemaError::EmptyExerciseList),
            ReadError::Schema(SchemaError::EmptyExerciseList)
        ));
    }

    #[test]
    fn test_read_error_display_is_transparent() {
        assert_eq!(
            ReadError::from(StorageError::NotFound("phase1".into())).to_string(),
            "document 'phase1' not found"
        );
        assert_eq!(
            ReadError::from(SchemaError::EmptyCategory("Mobility".into())).to_string(),
            "category 'Mobility' contains no exercises, details or subcategories"
        );
    }
}
