//! Interpreter errors.
//!
//! Every variant ends the current run. Reaching the end of the program is
//! not an error and never shows up here.

use std::fmt;
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which collaborator stream failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// The instruction source.
    Program,
    /// The byte source for `,`.
    Input,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Program => write!(f, "program"),
            Stream::Input => write!(f, "input"),
        }
    }
}

/// Direction of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Pop or peek on an empty control stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("control stack is empty")]
pub struct EmptyStack;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unbalanced brackets: `]` at program byte {offset} has no matching `[`")]
    ControlFlow {
        offset: u64,
        #[source]
        source: EmptyStack,
    },

    #[error("tape bounds: cannot move {direction} from cell {cursor} of {len}")]
    TapeBounds {
        cursor: usize,
        len: usize,
        direction: Direction,
    },

    #[error("{stream} stream unavailable")]
    SourceUnavailable {
        stream: Stream,
        #[source]
        source: io::Error,
    },

    #[error("output sink unavailable")]
    SinkUnavailable(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
