use std::{fmt, str::FromStr};

use cgmath::Vector3;

use crate::error::FormatError;

/// Number of whitespace separated fields on every level line.
pub const FIELD_COUNT: usize = 10;

const NUMERIC_FIELDS: [&str; FIELD_COUNT - 1] = [
    "x", "y", "z", "xRot", "yRot", "zRot", "width", "height", "depth",
];

/**
 * A `BlockRecord` is one line of a level file: a sprite placed with a position,
 * an Euler rotation in degrees and a non-uniform scale.
 *
 * The sprite id never carries a file extension and is never empty. It doubles as
 * the display name of the placed block, the texture cache key and the tag name.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct BlockRecord {
    pub sprite_id: String,
    pub position: Vector3<f32>,
    /// Euler angles in degrees.
    pub rotation: Vector3<f32>,
    /// `x` is the width, `y` the height, `z` the depth.
    pub scale: Vector3<f32>,
}

impl BlockRecord {
    pub fn new(
        sprite_id: &str,
        position: Vector3<f32>,
        rotation: Vector3<f32>,
        scale: Vector3<f32>,
    ) -> Self {
        Self {
            sprite_id: strip_extension(sprite_id).to_string(),
            position,
            rotation,
            scale,
        }
    }

    pub fn width(&self) -> f32 {
        self.scale.x
    }

    /// Parses one level line.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(FormatError::FieldCount {
                found: fields.len(),
            });
        }

        let sprite_id = strip_extension(fields[0]);
        if sprite_id.is_empty() {
            return Err(FormatError::EmptySprite);
        }

        let mut numbers = [0f32; FIELD_COUNT - 1];
        for ((slot, value), field) in numbers.iter_mut().zip(&fields[1..]).zip(NUMERIC_FIELDS) {
            *slot = value.parse().map_err(|source| FormatError::NotANumber {
                field,
                value: value.to_string(),
                source,
            })?;
        }
        let [x, y, z, x_rot, y_rot, z_rot, width, height, depth] = numbers;

        Ok(Self {
            sprite_id: sprite_id.to_string(),
            position: Vector3::new(x, y, z),
            rotation: Vector3::new(x_rot, y_rot, z_rot),
            scale: Vector3::new(width, height, depth),
        })
    }

    /// Formats the record as one level line, without the line terminator.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl FromStr for BlockRecord {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// `f32`'s Display is the shortest representation that parses back to the same value.
impl fmt::Display for BlockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            sprite_id,
            position: p,
            rotation: r,
            scale: s,
        } = self;
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {}",
            sprite_id, p.x, p.y, p.z, r.x, r.y, r.z, s.x, s.y, s.z
        )
    }
}

/// Drops everything from the first `.` on: `brick.png` and `brick.old.png` both become `brick`.
pub fn strip_extension(sprite: &str) -> &str {
    sprite.split('.').next().unwrap_or(sprite)
}
