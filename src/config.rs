use clap::ValueEnum;

use crate::error::{Error, Result};

/// What happens when the cursor is moved past an end of the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BoundaryPolicy {
    /// Wrap around to the opposite end.
    #[default]
    Wrap,
    /// Stay on the edge cell; the move is a no-op.
    Clamp,
    /// Append a zero cell on the right. Moving left of cell 0 is an error.
    GrowRight,
    /// Any move past either end is an error.
    Strict,
}

/// How a byte read by `,` is turned into a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputTransform {
    /// Store the raw byte.
    #[default]
    Identity,
    /// Store the byte minus `b'0'`, wrapping, so ASCII digits become 0..=9.
    SubtractAsciiZero,
}

impl InputTransform {
    pub fn apply(self, byte: u8) -> u8 {
        match self {
            InputTransform::Identity => byte,
            InputTransform::SubtractAsciiZero => byte.wrapping_sub(b'0'),
        }
    }
}

/// Configuration for a single interpreter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of cells allocated up front.
    pub tape_size: usize,
    /// Cursor behaviour at the tape ends.
    pub boundary: BoundaryPolicy,
    /// Transform applied to bytes read by `,`.
    pub input_transform: InputTransform,
    /// Value stored by `,` once the input stream is exhausted.
    pub eof_value: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tape_size: 30_000,
            boundary: BoundaryPolicy::Wrap,
            input_transform: InputTransform::Identity,
            eof_value: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.tape_size == 0 {
            return Err(Error::InvalidConfig("tape size must be positive".to_string()));
        }
        Ok(())
    }
}
