pub mod op;
pub mod config;
pub mod error;
pub mod tape;
pub mod stack;
pub mod source;
pub mod cache;
pub mod engine;
pub mod logging;

#[cfg(test)]
mod oracle;

pub use config::{BoundaryPolicy, Config, InputTransform};
pub use engine::{Interpreter, State, Summary};
pub use error::{Error, Result};
