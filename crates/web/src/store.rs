//! File-backed key-value store and catalog loading.
//!
//! Each key is one `<key>.json` file inside the data directory. Writes go to
//! a temporary file first and are renamed into place, so a crash mid-write
//! leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pantry_core::storage::{KeyValueStore, StorageError};
use pantry_core::{Catalog, CatalogError};

/// Key-value store persisting each value as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Errors loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Load the catalog from `path`, or the built-in one when `None`.
///
/// # Errors
///
/// Returns [`CatalogLoadError`] if the file cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let yaml = fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_yaml_str(&yaml).map_err(|source| CatalogLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        recipes = catalog.recipes.len(),
        priced_items = catalog.prices.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}
