use std::fmt;

const PLUS: u8 = b'+';
const MINUS: u8 = b'-';
const GREATER: u8 = b'>';
const LESS: u8 = b'<';
const COMMA: u8 = b',';
const DOT: u8 = b'.';
const LBRACKET: u8 = b'[';
const RBRACKET: u8 = b']';

/// One instruction of the tape language.
///
/// Every other byte in a program is a comment and never becomes an `Op`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+` increments the current cell, wrapping 255 to 0.
    Inc,
    /// `-` decrements the current cell, wrapping 0 to 255.
    Dec,
    /// `>` moves the cursor one cell right.
    Right,
    /// `<` moves the cursor one cell left.
    Left,
    /// `,` reads one input byte into the current cell.
    Read,
    /// `.` writes the current cell to the output.
    Write,
    /// `[` enters a loop if the current cell is non-zero.
    Open,
    /// `]` jumps back to the matching `[` if the current cell is non-zero.
    Close,
}

impl Op {
    pub fn decode(byte: u8) -> Option<Op> {
        match byte {
            PLUS => Some(Op::Inc),
            MINUS => Some(Op::Dec),
            GREATER => Some(Op::Right),
            LESS => Some(Op::Left),
            COMMA => Some(Op::Read),
            DOT => Some(Op::Write),
            LBRACKET => Some(Op::Open),
            RBRACKET => Some(Op::Close),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Op::Inc => PLUS,
            Op::Dec => MINUS,
            Op::Right => GREATER,
            Op::Left => LESS,
            Op::Read => COMMA,
            Op::Write => DOT,
            Op::Open => LBRACKET,
            Op::Close => RBRACKET,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.byte() as char)
    }
}
