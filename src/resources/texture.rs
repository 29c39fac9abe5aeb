use std::{collections::HashMap, path::PathBuf, sync::Arc};

use crate::data_structures::texture::Texture;

/// Resource path of a sprite's image, relative to the resources directory.
pub fn sprite_resource_path(sprite_id: &str) -> String {
    format!("Sprites/{sprite_id}")
}

/// The asset system: resolves a resource path (without extension) to a texture.
///
/// `None` means no texture exists for the path. Loaders are only consulted
/// through a [`TextureCache`], at most once per sprite and load.
pub trait TextureLoader {
    type Handle: Clone;

    fn load_texture(&mut self, resource_path: &str) -> Option<Self::Handle>;
}

impl<F, H> TextureLoader for F
where
    F: FnMut(&str) -> Option<H>,
    H: Clone,
{
    type Handle = H;

    fn load_texture(&mut self, resource_path: &str) -> Option<H> {
        self(resource_path)
    }
}

/// Loads sprite images from a resources directory, trying the known image
/// extensions in order. Undecodable files are treated as missing.
#[derive(Clone, Debug)]
pub struct SpriteLoader {
    root: PathBuf,
}

impl SpriteLoader {
    pub const EXTENSIONS: [&'static str; 6] = ["png", "jpg", "jpeg", "tif", "gif", "bmp"];

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn find(&self, resource_path: &str) -> Option<(PathBuf, &'static str)> {
        Self::EXTENSIONS.iter().find_map(|ext| {
            let path = self.root.join(format!("{resource_path}.{ext}"));
            path.is_file().then_some((path, *ext))
        })
    }
}

impl TextureLoader for SpriteLoader {
    type Handle = Arc<Texture>;

    fn load_texture(&mut self, resource_path: &str) -> Option<Arc<Texture>> {
        let (path, ext) = self.find(resource_path)?;
        let label = resource_path.rsplit('/').next().unwrap_or(resource_path);
        let texture = std::fs::read(&path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| Texture::from_bytes(&bytes, label, Some(ext)));
        match texture {
            Ok(texture) => Some(Arc::new(texture)),
            Err(e) => {
                log::warn!("Could not load texture {}: {}", path.display(), e);
                None
            }
        }
    }
}

/**
 * Memoizes texture lookups by sprite id for the lifetime of one loaded level.
 *
 * A miss asks the loader for `Sprites/<sprite id>` and stores whatever comes back,
 * including `None`: a sprite without a texture is not looked up again until the
 * cache is cleared, even if its image appears on disk in the meantime.
 */
#[derive(Debug)]
pub struct TextureCache<H> {
    entries: HashMap<String, Option<H>>,
}

impl<H: Clone> TextureCache<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn resolve<L>(&mut self, sprite_id: &str, loader: &mut L) -> Option<H>
    where
        L: TextureLoader<Handle = H> + ?Sized,
    {
        if let Some(entry) = self.entries.get(sprite_id) {
            return entry.clone();
        }
        log::debug!("Texture cache miss for {sprite_id}");
        let handle = loader.load_texture(&sprite_resource_path(sprite_id));
        self.entries.insert(sprite_id.to_string(), handle.clone());
        handle
    }

    /// Whether a lookup for `sprite_id` has been made, successful or not.
    pub fn contains(&self, sprite_id: &str) -> bool {
        self.entries.contains_key(sprite_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<H: Clone> Default for TextureCache<H> {
    fn default() -> Self {
        Self::new()
    }
}
