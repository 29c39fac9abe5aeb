use std::{cell::RefCell, collections::HashMap, path::Path, rc::Rc};

use block_level::{LevelConfig, TextureLoader};

/// Texture loader that hands out the resource path as the handle and records
/// how often every path was requested. Paths listed as missing resolve to `None`.
#[derive(Clone, Default)]
pub(crate) struct CountingLoader {
    calls: Rc<RefCell<HashMap<String, u32>>>,
    missing: Vec<String>,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(mut self, resource_path: &str) -> Self {
        self.missing.push(resource_path.to_string());
        self
    }

    pub fn calls(&self, resource_path: &str) -> u32 {
        self.calls
            .borrow()
            .get(resource_path)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        self.calls.borrow().values().sum()
    }
}

impl TextureLoader for CountingLoader {
    type Handle = String;

    fn load_texture(&mut self, resource_path: &str) -> Option<String> {
        *self
            .calls
            .borrow_mut()
            .entry(resource_path.to_string())
            .or_insert(0) += 1;
        if self.missing.iter().any(|m| m == resource_path) {
            None
        } else {
            Some(resource_path.to_string())
        }
    }
}

/// Bootstraps `root` and writes `content` as the data file of `level`.
pub(crate) fn write_level(root: &Path, level: &str, content: &str) -> LevelConfig {
    let config = LevelConfig::new(root, level);
    config.bootstrap().expect("Failed to create level directories.");
    std::fs::write(config.load_path(), content).expect("Failed to write level file.");
    config
}

pub(crate) fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() <= 1e-5 * a.abs().max(1.0), "{a} != {b}");
}
