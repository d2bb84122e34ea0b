use std::io::{Bytes, Read};

use crate::error::{Error, Result, Stream};
use crate::op::Op;

/// Pulls instruction tokens one at a time from a forward-only byte stream.
///
/// Bytes outside the operation alphabet are consumed and dropped. Once the
/// stream reports end-of-input the source stays exhausted and is never read
/// again.
pub struct Source<R> {
    bytes: Bytes<R>,
    offset: u64,
    exhausted: bool,
}

impl<R: Read> Source<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            offset: 0,
            exhausted: false,
        }
    }

    /// Next operation, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Op>> {
        if self.exhausted {
            return Ok(None);
        }
        loop {
            match self.bytes.next() {
                None => {
                    self.exhausted = true;
                    return Ok(None);
                }
                Some(Err(source)) => {
                    return Err(Error::SourceUnavailable {
                        stream: Stream::Program,
                        source,
                    });
                }
                Some(Ok(byte)) => {
                    self.offset += 1;
                    if let Some(op) = Op::decode(byte) {
                        return Ok(Some(op));
                    }
                }
            }
        }
    }

    /// Number of program bytes consumed so far, comments included.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
