//! Level session: load, place, save.
//!
//! A [`LevelSession`] ties a [`LevelConfig`] to the host's [`LevelStore`], a
//! [`TextureLoader`] and a [`TagRegistry`]. It is driven by discrete requests from
//! the host, typically from its per-frame tick:
//!
//! 1. `load` reads the level file, parses every line and normalizes the records.
//!    Nothing in the live set changes until all of that succeeded.
//! 2. The live set is cleared, the texture cache rebuilt, and every record placed
//!    in file order with its resolved texture (and tag, when enabled).
//! 3. `save` reads the current live set back and overwrites the save file.

use instant::Instant;

use crate::{
    context::LevelConfig,
    data_structures::{
        level::{Level, normalize, parse_level, serialize_level, unit_width},
        scene::{LevelStore, Placement, TagList, TagRegistry},
    },
    error::LevelError,
    resources::{
        read_lines,
        texture::{TextureCache, TextureLoader},
        write_lines,
    },
};

/// Flags a host raises to request work on its next tick. Each flag is cleared
/// once the request has been attempted, whether or not it succeeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadRequests {
    pub load: bool,
    pub save: bool,
}

/// Outcome of a successful load.
#[derive(Debug)]
pub struct LoadReport<H> {
    /// Store handles of the placed blocks, in file order.
    pub handles: Vec<H>,
    /// Smallest width before normalization; `None` for an empty level.
    pub unit_width: Option<f32>,
    /// Sprite ids without a texture, in order of first appearance.
    pub missing_textures: Vec<String>,
}

impl<H> LoadReport<H> {
    pub fn placed(&self) -> usize {
        self.handles.len()
    }
}

pub struct LevelSession<S, L, R = TagList>
where
    S: LevelStore,
{
    config: LevelConfig,
    store: S,
    loader: L,
    tags: R,
    cache: TextureCache<S::Texture>,
    level: Level,
}

impl<S, L> LevelSession<S, L, TagList>
where
    S: LevelStore,
    S::Texture: Clone,
    L: TextureLoader<Handle = S::Texture>,
{
    pub fn new(config: LevelConfig, store: S, loader: L) -> Self {
        Self::with_registry(config, store, loader, TagList::new())
    }
}

impl<S, L, R> LevelSession<S, L, R>
where
    S: LevelStore,
    S::Texture: Clone,
    L: TextureLoader<Handle = S::Texture>,
    R: TagRegistry,
{
    pub fn with_registry(config: LevelConfig, store: S, loader: L, tags: R) -> Self {
        let level = Level::new(config.level.clone(), Vec::new());
        Self {
            config,
            store,
            loader,
            tags,
            cache: TextureCache::new(),
            level,
        }
    }

    /// Loads the configured level, replacing whatever is currently placed.
    ///
    /// On error the live set, the texture cache and [`level`](Self::level) are
    /// left as they were.
    pub fn load(&mut self) -> Result<LoadReport<S::Handle>, LevelError> {
        let start = Instant::now();
        let path = self.config.load_path();
        let lines = read_lines(&path)?;
        let records = parse_level(&lines)?;
        let unit = unit_width(&records);
        let level = Level::new(self.config.level.clone(), normalize(records));

        self.store.destroy_all();
        self.cache = TextureCache::new();

        let mut handles = Vec::with_capacity(level.len());
        let mut missing_textures = Vec::new();
        for record in &level.records {
            let first_lookup = !self.cache.contains(&record.sprite_id);
            let texture = self.cache.resolve(&record.sprite_id, &mut self.loader);
            if texture.is_none() && first_lookup {
                log::warn!("No texture for sprite {}", record.sprite_id);
                missing_textures.push(record.sprite_id.clone());
            }

            let tag = if self.config.add_tags {
                self.tags.register_tag(&record.sprite_id);
                Some(record.sprite_id.clone())
            } else {
                None
            };

            handles.push(self.store.allocate(Placement {
                record: record.clone(),
                texture,
                tag,
            }));
        }

        log::info!(
            "Loaded level {} from {} ({} blocks, unit width {:?}) in {:?}",
            level.name,
            path.display(),
            handles.len(),
            unit,
            start.elapsed()
        );
        self.level = level;

        Ok(LoadReport {
            handles,
            unit_width: unit,
            missing_textures,
        })
    }

    /// Writes the current live set to the save file, replacing its content.
    /// Returns the number of blocks written.
    pub fn save(&self) -> Result<usize, LevelError> {
        let records = self.store.enumerate();
        let lines = serialize_level(&records);

        let dir = self.config.save_dir();
        std::fs::create_dir_all(&dir).map_err(|e| LevelError::io(&dir, e))?;
        let path = self.config.save_path();
        write_lines(&path, &lines)?;

        log::info!(
            "Saved level {} ({} blocks) to {}",
            self.config.level,
            records.len(),
            path.display()
        );
        Ok(records.len())
    }

    /// Services raised request flags: load first, then save.
    pub fn on_tick(&mut self, requests: &mut LoadRequests) -> Result<(), LevelError> {
        if requests.load {
            requests.load = false;
            self.load()?;
        }
        if requests.save {
            requests.save = false;
            self.save()?;
        }
        Ok(())
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Changing the configuration takes effect on the next load or save.
    pub fn config_mut(&mut self) -> &mut LevelConfig {
        &mut self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The records of the last successful load, normalized.
    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn texture_cache(&self) -> &TextureCache<S::Texture> {
        &self.cache
    }

    pub fn tags(&self) -> &R {
        &self.tags
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
