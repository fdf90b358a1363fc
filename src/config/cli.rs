use crate::domain::plan::FlatMap;
use crate::domain::ports::PlanStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "ice-planner-data.json";

/// File-backed plan store: one JSON record under the base path.
#[derive(Debug, Clone)]
pub struct JsonPlanStore {
    base_path: String,
}

impl JsonPlanStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn data_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(DATA_FILE_NAME)
    }
}

impl PlanStore for JsonPlanStore {
    fn load(&self) -> Result<Option<FlatMap>> {
        let path = self.data_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<FlatMap>(&content) {
            Ok(map) => Ok(Some(map)),
            Err(e) => {
                // A record that no longer parses loads as "nothing saved".
                tracing::warn!("Ignoring malformed record at {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn save(&self, map: &FlatMap) -> Result<()> {
        let path = self.data_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(map)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.data_path();
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
