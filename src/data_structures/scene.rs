//! The live block set and the host capabilities a level session drives.
//!
//! The session never owns engine objects. It hands [`Placement`]s to a
//! [`LevelStore`] and reads the current block state back from it at save time,
//! so edits made by the host between load and save end up in the saved file.
//!
//! [`BlockScene`] and [`TagList`] are in-memory implementations for tools, tests
//! and hosts that keep blocks as plain data.

use cgmath::Vector3;

use crate::data_structures::block::BlockRecord;

/// Everything the host needs to instantiate one block.
#[derive(Clone, Debug)]
pub struct Placement<T> {
    pub record: BlockRecord,
    /// `None` when the sprite has no texture.
    pub texture: Option<T>,
    /// Set when tagging is enabled; equal to the sprite id.
    pub tag: Option<String>,
}

/// Storage for placed blocks, owned by the host.
pub trait LevelStore {
    type Texture;
    type Handle;

    /// Instantiates a block and appends it to the live set.
    fn allocate(&mut self, placement: Placement<Self::Texture>) -> Self::Handle;

    /// Current state of every live block, in live-set order.
    fn enumerate(&self) -> Vec<BlockRecord>;

    fn destroy_all(&mut self);
}

/// Editor metadata registration. Registering a tag twice is a no-op.
pub trait TagRegistry {
    fn register_tag(&mut self, tag: &str);
}

/// Identifies a block inside a [`BlockScene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(pub u64);

#[derive(Clone, Debug)]
pub struct PlacedBlock<T> {
    pub id: BlockId,
    pub name: String,
    pub position: Vector3<f32>,
    /// Euler angles in degrees, kept as given so that saving does not drift.
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub texture: Option<T>,
    pub tag: Option<String>,
}

impl<T> PlacedBlock<T> {
    pub fn record(&self) -> BlockRecord {
        BlockRecord {
            sprite_id: self.name.clone(),
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

/**
 * A plain-data live block set.
 *
 * Ids are handed out in allocation order and are not reused after `destroy_all`,
 * so a stale `BlockId` from a previous load never aliases a new block.
 */
#[derive(Debug)]
pub struct BlockScene<T> {
    blocks: Vec<PlacedBlock<T>>,
    next_id: u64,
}

impl<T> BlockScene<T> {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedBlock<T>> {
        self.blocks.iter()
    }

    pub fn get(&self, id: BlockId) -> Option<&PlacedBlock<T>> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Mutable access for host-side edits (moving, rotating, resizing a block).
    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut PlacedBlock<T>> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Removes a single block, keeping the order of the others.
    pub fn remove(&mut self, id: BlockId) -> Option<PlacedBlock<T>> {
        let idx = self.blocks.iter().position(|b| b.id == id)?;
        Some(self.blocks.remove(idx))
    }
}

impl<T> Default for BlockScene<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LevelStore for BlockScene<T> {
    type Texture = T;
    type Handle = BlockId;

    fn allocate(&mut self, placement: Placement<T>) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        let Placement {
            record,
            texture,
            tag,
        } = placement;
        self.blocks.push(PlacedBlock {
            id,
            name: record.sprite_id,
            position: record.position,
            rotation: record.rotation,
            scale: record.scale,
            texture,
            tag,
        });
        id
    }

    fn enumerate(&self) -> Vec<BlockRecord> {
        self.blocks.iter().map(PlacedBlock::record).collect()
    }

    fn destroy_all(&mut self) {
        self.blocks.clear();
    }
}

/// Registered tags, newest first.
#[derive(Clone, Debug, Default)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl TagRegistry for TagList {
    fn register_tag(&mut self, tag: &str) {
        if !self.contains(tag) {
            self.tags.insert(0, tag.to_string());
        }
    }
}
