use crate::error::Result;
use crate::model::Library;
use crate::store::DataStore;
use std::fs;
use std::path::PathBuf;

pub const DATA_FILENAME: &str = "library.json";

/// File-backed store: the whole library lives in one JSON document under
/// the data root. Reads tolerate a missing file (fresh install) by
/// returning an empty library; writes create the root as needed.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Library> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(Library::default());
        }
        let content = fs::read_to_string(&path)?;
        let library: Library = serde_json::from_str(&content)?;
        Ok(library)
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        let content = serde_json::to_string_pretty(library)?;
        fs::write(self.data_file(), content)?;
        Ok(())
    }

    fn data_path(&self) -> Result<PathBuf> {
        Ok(self.data_file())
    }
}
