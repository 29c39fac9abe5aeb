//! Whole-level operations: parsing every line, unit normalization and serialization.
//!
//! A level is an ordered list of [`BlockRecord`]s. Line order is array order and
//! is preserved on save so that saved files diff predictably.

use crate::{data_structures::block::BlockRecord, error::LevelError};

/// The records of one level together with its logical name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
    pub name: String,
    pub records: Vec<BlockRecord>,
}

impl Level {
    pub fn new(name: impl Into<String>, records: Vec<BlockRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Parses and normalizes `lines`, the way every load does.
    pub fn from_lines<S: AsRef<str>>(
        name: impl Into<String>,
        lines: &[S],
    ) -> Result<Self, LevelError> {
        let records = normalize(parse_level(lines)?);
        Ok(Self::new(name, records))
    }

    pub fn to_lines(&self) -> Vec<String> {
        serialize_level(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses every line in order. The first malformed line fails the whole level.
pub fn parse_level<S: AsRef<str>>(lines: &[S]) -> Result<Vec<BlockRecord>, LevelError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            BlockRecord::parse(line.as_ref()).map_err(|source| LevelError::Format {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// One line per record, in iteration order.
pub fn serialize_level<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a BlockRecord>,
{
    records.into_iter().map(BlockRecord::to_line).collect()
}

/// The smallest width in the level, `None` for an empty level.
pub fn unit_width(records: &[BlockRecord]) -> Option<f32> {
    records
        .iter()
        .map(BlockRecord::width)
        .reduce(f32::min)
}

/**
 * Expresses positions and scales in multiples of the level's unit block, the
 * smallest width. Rotations are untouched.
 *
 * Afterwards the smallest width is exactly `1.0`, so normalizing twice is the same
 * as normalizing once. A unit that is not a finite positive number leaves the
 * records as they are.
 */
pub fn normalize(mut records: Vec<BlockRecord>) -> Vec<BlockRecord> {
    let Some(unit) = unit_width(&records) else {
        return records;
    };
    if !(unit.is_finite() && unit > 0.0) {
        log::warn!("Smallest block width is {unit}; level is left unnormalized.");
        return records;
    }
    if unit == 1.0 {
        return records;
    }
    for record in &mut records {
        record.position /= unit;
        record.scale /= unit;
    }
    records
}
