//! Whole-program reference interpreter used to check the streaming engine.
//!
//! Holds the entire program in memory and jumps through a precomputed
//! bracket table, so it needs no loop cache. Input EOF stores 0 and `,`
//! uses the identity transform, matching `Config::default()`.

use crate::config::BoundaryPolicy;

pub struct OracleRun {
    pub output: Vec<u8>,
    pub cells: Vec<u8>,
    pub cursor: usize,
}

/// Run `program` to completion. Returns `None` if it does not finish within
/// `step_limit` steps.
///
/// `program` must have balanced brackets. Only `Wrap` and `Clamp` are
/// modelled.
pub fn execute(
    program: &[u8],
    input: &[u8],
    tape_size: usize,
    boundary: BoundaryPolicy,
    step_limit: usize,
) -> Option<OracleRun> {
    let code: Vec<u8> = program
        .iter()
        .copied()
        .filter(|b| b"+-<>,.[]".contains(b))
        .collect();
    let bracket_match = build_bracket_table(&code);

    let mut cells = vec![0u8; tape_size];
    let mut cursor = tape_size / 2;
    let mut input = input.iter().copied();
    let mut output = Vec::new();
    let mut ip = 0;
    let mut steps = 0;

    while ip < code.len() {
        if steps == step_limit {
            return None;
        }
        steps += 1;
        match code[ip] {
            b'+' => cells[cursor] = cells[cursor].wrapping_add(1),
            b'-' => cells[cursor] = cells[cursor].wrapping_sub(1),
            b'>' => {
                cursor = match boundary {
                    BoundaryPolicy::Clamp => (cursor + 1).min(tape_size - 1),
                    _ => (cursor + 1) % tape_size,
                }
            }
            b'<' => {
                cursor = match boundary {
                    BoundaryPolicy::Clamp => cursor.saturating_sub(1),
                    _ => (cursor + tape_size - 1) % tape_size,
                }
            }
            b',' => cells[cursor] = input.next().unwrap_or(0),
            b'.' => output.push(cells[cursor]),
            b'[' if cells[cursor] == 0 => ip = bracket_match[ip],
            b']' if cells[cursor] != 0 => ip = bracket_match[ip],
            _ => {}
        }
        ip += 1;
    }

    Some(OracleRun {
        output,
        cells,
        cursor,
    })
}

/// `result[i]` is the index of the bracket matching position `i`, or
/// `usize::MAX` if `i` is not a matched bracket.
fn build_bracket_table(code: &[u8]) -> Vec<usize> {
    let mut table = vec![usize::MAX; code.len()];
    let mut stack = Vec::new();

    for (i, &b) in code.iter().enumerate() {
        match b {
            b'[' => stack.push(i),
            b']' => {
                if let Some(open) = stack.pop() {
                    table[open] = i;
                    table[i] = open;
                }
            }
            _ => {}
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_brackets_table() {
        let table = build_bracket_table(b"[[]]");
        assert_eq!(table, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_oracle_copy_loop() {
        let run = execute(b",[>+<-]>.", &[5], 8, BoundaryPolicy::Wrap, 1000).unwrap();
        assert_eq!(run.output, vec![5]);
        assert_eq!(run.cursor, 5);
    }

    #[test]
    fn test_oracle_step_limit() {
        assert!(execute(b"+[]", &[], 4, BoundaryPolicy::Wrap, 100).is_none());
    }
}
