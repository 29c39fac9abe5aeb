//! block-level
//!
//! Loads plain-text block levels into a host scene and writes them back. Every
//! line of a level file places one textured block:
//!
//! ```text
//! <sprite> <x> <y> <z> <xRot> <yRot> <zRot> <width> <height> <depth>
//! ```
//!
//! On load all positions and scales are divided by the smallest width in the
//! level, so geometry is stored in multiples of one unit block rather than in
//! engine units. Saving writes the host's current block state, edits included.
//!
//! High-level modules
//! - `context`: paths and options of a level session, directory bootstrap
//! - `data_structures`: block records, levels, textures and the live block set
//! - `error`: format and I/O errors
//! - `resources`: level file I/O, sprite loading and the texture cache
//! - `session`: the load / place / save lifecycle
//!

pub mod context;
pub mod data_structures;
pub mod error;
pub mod resources;
pub mod session;

// Re-exports commonly used types for convenience in downstream code.
pub use context::LevelConfig;
pub use data_structures::{
    block::BlockRecord,
    level::{Level, normalize, parse_level, serialize_level},
    scene::{BlockScene, LevelStore, Placement, TagList, TagRegistry},
};
pub use error::{FormatError, LevelError};
pub use resources::texture::{SpriteLoader, TextureCache, TextureLoader};
pub use session::{LevelSession, LoadReport, LoadRequests};

/// Installs `env_logger` as the `log` backend. `RUST_LOG` selects the level.
/// Calling it more than once is harmless.
pub fn init_logging() {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };
}
