use crate::config::BoundaryPolicy;
use crate::error::{Direction, Error, Result};

/// The byte memory a program operates on.
///
/// Cells are zero-initialized and wrap modulo 256. The cursor starts at the
/// midpoint so programs can move in either direction from the start, and it
/// never leaves `0..len`: every move goes through the boundary policy.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    cursor: usize,
    policy: BoundaryPolicy,
}

impl Tape {
    /// `size` must be non-zero; `Config::validate` checks this.
    pub fn new(size: usize, policy: BoundaryPolicy) -> Self {
        debug_assert!(size > 0);
        Self {
            cells: vec![0u8; size],
            cursor: size / 2,
            policy,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self) -> u8 {
        self.cells[self.cursor]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.cursor] = value;
    }

    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_sub(1);
    }

    pub fn move_right(&mut self) -> Result<()> {
        let last = self.cells.len() - 1;
        if self.cursor < last {
            self.cursor += 1;
            return Ok(());
        }
        match self.policy {
            BoundaryPolicy::Wrap => self.cursor = 0,
            BoundaryPolicy::Clamp => {}
            BoundaryPolicy::GrowRight => {
                self.cells.push(0);
                self.cursor += 1;
            }
            BoundaryPolicy::Strict => return Err(self.out_of_bounds(Direction::Right)),
        }
        Ok(())
    }

    pub fn move_left(&mut self) -> Result<()> {
        if self.cursor > 0 {
            self.cursor -= 1;
            return Ok(());
        }
        match self.policy {
            BoundaryPolicy::Wrap => self.cursor = self.cells.len() - 1,
            BoundaryPolicy::Clamp => {}
            BoundaryPolicy::GrowRight | BoundaryPolicy::Strict => {
                return Err(self.out_of_bounds(Direction::Left));
            }
        }
        Ok(())
    }

    fn out_of_bounds(&self, direction: Direction) -> Error {
        Error::TapeBounds {
            cursor: self.cursor,
            len: self.cells.len(),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed_at_midpoint() {
        let tape = Tape::new(30_000, BoundaryPolicy::Wrap);
        assert_eq!(tape.cursor(), 15_000);
        assert!(tape.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_cell_arithmetic_wraps() {
        let mut tape = Tape::new(4, BoundaryPolicy::Wrap);
        tape.decrement();
        assert_eq!(tape.get(), 255);
        tape.increment();
        assert_eq!(tape.get(), 0);
        tape.set(255);
        tape.increment();
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn test_wrap_policy() {
        let mut tape = Tape::new(4, BoundaryPolicy::Wrap);
        // Cursor starts at 2.
        tape.move_right().unwrap();
        tape.move_right().unwrap();
        assert_eq!(tape.cursor(), 0);
        tape.move_left().unwrap();
        assert_eq!(tape.cursor(), 3);
    }

    #[test]
    fn test_clamp_policy() {
        let mut tape = Tape::new(3, BoundaryPolicy::Clamp);
        for _ in 0..5 {
            tape.move_left().unwrap();
        }
        assert_eq!(tape.cursor(), 0);
        for _ in 0..5 {
            tape.move_right().unwrap();
        }
        assert_eq!(tape.cursor(), 2);
        assert_eq!(tape.len(), 3);
    }

    #[test]
    fn test_grow_right_policy() {
        let mut tape = Tape::new(2, BoundaryPolicy::GrowRight);
        tape.move_right().unwrap();
        tape.move_right().unwrap();
        assert_eq!(tape.cursor(), 3);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.get(), 0);
    }

    #[test]
    fn test_grow_right_rejects_left_of_zero() {
        let mut tape = Tape::new(2, BoundaryPolicy::GrowRight);
        tape.move_left().unwrap();
        let err = tape.move_left().unwrap_err();
        assert!(matches!(
            err,
            Error::TapeBounds { cursor: 0, len: 2, direction: Direction::Left }
        ));
        assert_eq!(tape.cursor(), 0);
    }

    #[test]
    fn test_strict_policy() {
        let mut tape = Tape::new(2, BoundaryPolicy::Strict);
        // Cursor starts at 1, the last cell.
        assert!(matches!(
            tape.move_right(),
            Err(Error::TapeBounds { direction: Direction::Right, .. })
        ));
        tape.move_left().unwrap();
        assert!(matches!(
            tape.move_left(),
            Err(Error::TapeBounds { direction: Direction::Left, .. })
        ));
    }

    #[test]
    fn test_single_cell_tape() {
        let mut tape = Tape::new(1, BoundaryPolicy::Wrap);
        tape.move_right().unwrap();
        tape.move_left().unwrap();
        assert_eq!(tape.cursor(), 0);
    }
}
