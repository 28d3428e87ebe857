use super::DataStore;
use crate::error::{LadleError, Result};
use crate::model::Recipe;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-file JSON storage: one array of recipe objects, pretty-printed
/// with 2-space indentation, rewritten in full on every save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a diagnostic if the document exists but cannot be parsed.
    ///
    /// A corrupt document is recovered locally (the store acts as empty),
    /// so this is the only place the problem becomes visible. The CLI
    /// calls it once at startup.
    pub fn parse_warning(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Vec<Recipe>>(&content) {
            Ok(_) => None,
            Err(_) => Some(format!(
                "Error reading {}. Starting with empty recipe list.",
                self.path.display()
            )),
        }
    }
}

impl DataStore for FileStore {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LadleError::Io)?;
        // A document that fails to parse is recovered as an empty
        // collection; see parse_warning for the user-facing diagnostic.
        match serde_json::from_str(&content) {
            Ok(recipes) => Ok(recipes),
            Err(_) => Ok(Vec::new()),
        }
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LadleError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(recipes).map_err(LadleError::Serialization)?;

        // Write to a sibling tmp file and rename over the original, so a
        // crash mid-write never truncates the document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(LadleError::Io)?;
        fs::rename(&tmp, &self.path).map_err(LadleError::Io)?;
        Ok(())
    }
}
