//! Level data structures: block records, levels, textures and scenes.
//!
//! - `block` is one placed sprite and its line format
//! - `level` holds the ordered records of a level and the unit normalization
//! - `texture` contains decoded sprite images
//! - `scene` defines the live block set the host owns, plus an in-memory one

pub mod block;
pub mod level;
pub mod scene;
pub mod texture;
