use std::path::{Path, PathBuf};

use crate::error::LevelError;

/// File extension of every level file.
pub const LEVEL_EXTENSION: &str = "txt";

/// Where levels and sprites live and how a level session behaves.
///
/// Directory layout under `root`:
///
/// ```text
/// Data/                authored levels
/// Save/                saved levels
/// Resources/Sprites/   sprite images
/// Resources/Levels/    level source images
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LevelConfig {
    pub root: PathBuf,
    /// Logical level name, the file stem of the level file.
    pub level: String,
    /// Load from `Save/` instead of `Data/`.
    pub use_save_data: bool,
    /// Register every sprite id as a tag while placing blocks.
    pub add_tags: bool,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            level: "level".to_string(),
            use_save_data: false,
            add_tags: false,
        }
    }
}

impl LevelConfig {
    pub fn new(root: impl Into<PathBuf>, level: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            level: level.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_save_data(mut self, use_save_data: bool) -> Self {
        self.use_save_data = use_save_data;
        self
    }

    pub fn with_tags(mut self, add_tags: bool) -> Self {
        self.add_tags = add_tags;
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("Data")
    }

    pub fn save_dir(&self) -> PathBuf {
        self.root.join("Save")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("Resources")
    }

    pub fn sprites_dir(&self) -> PathBuf {
        self.resources_dir().join("Sprites")
    }

    pub fn levels_dir(&self) -> PathBuf {
        self.resources_dir().join("Levels")
    }

    /// The file a load reads from.
    pub fn load_path(&self) -> PathBuf {
        let dir = if self.use_save_data {
            self.save_dir()
        } else {
            self.data_dir()
        };
        level_file(&dir, &self.level)
    }

    /// The file a save writes to.
    pub fn save_path(&self) -> PathBuf {
        level_file(&self.save_dir(), &self.level)
    }

    /// Creates the directory layout. Existing directories are left alone.
    pub fn bootstrap(&self) -> Result<(), LevelError> {
        for dir in [
            self.data_dir(),
            self.save_dir(),
            self.resources_dir(),
            self.sprites_dir(),
            self.levels_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| LevelError::io(&dir, e))?;
        }
        Ok(())
    }
}

fn level_file(dir: &Path, level: &str) -> PathBuf {
    dir.join(format!("{level}.{LEVEL_EXTENSION}"))
}
