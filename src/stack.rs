use crate::error::EmptyStack;

/// LIFO of loop frames. Each frame is the loop-cache position of the `[`
/// that opened it.
#[derive(Debug, Default, Clone)]
pub struct ControlStack {
    frames: Vec<usize>,
}

impl ControlStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: usize) {
        self.frames.push(position);
    }

    pub fn pop(&mut self) -> Result<usize, EmptyStack> {
        self.frames.pop().ok_or(EmptyStack)
    }

    pub fn peek(&self) -> Result<usize, EmptyStack> {
        self.frames.last().copied().ok_or(EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
