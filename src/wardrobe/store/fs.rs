use super::{DataStore, WardrobeRecord};
use crate::error::{Result, WardrobeError};
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "wardrobe.json";

/// Stores the wardrobe record as pretty-printed JSON in a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WardrobeError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<WardrobeRecord>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&data_file).map_err(WardrobeError::Io)?;
        WardrobeRecord::from_json(&content).map(Some)
    }

    fn save(&mut self, record: &WardrobeRecord) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(record).map_err(WardrobeError::Serialization)?;
        fs::write(self.data_file(), content).map_err(WardrobeError::Io)?;
        tracing::debug!(path = %self.data_file().display(), "saved wardrobe");
        Ok(())
    }
}
