use std::io::{Bytes, Read, Write};

use tracing::{debug, trace, warn};

use crate::cache::LoopCache;
use crate::config::Config;
use crate::error::{Error, Result, Stream};
use crate::op::Op;
use crate::source::Source;
use crate::stack::ControlStack;
use crate::tape::Tape;

/// Execution state of an [`Interpreter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Executing tokens.
    Running,
    /// Scanning past a loop whose entry cell was zero. `depth` counts the
    /// brackets still open, starting at 1 for the skipped `[`.
    SkippingLoop { depth: usize },
    /// The program ended or a fatal error was raised.
    Halted,
}

/// Statistics for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Tokens executed, not counting tokens passed over while skipping.
    pub steps: u64,
    /// Bytes written by `.`.
    pub output_bytes: u64,
    /// Loops still open when the program ended.
    pub unclosed_loops: usize,
    /// Program bytes consumed, comments included.
    pub program_bytes: u64,
}

/// Direct interpreter over a streaming program.
///
/// The program is read one token at a time from `P` and never buffered as a
/// whole; loop bodies are recorded in a [`LoopCache`] on their first pass
/// and replayed from there. `,` reads from `I`, `.` writes to `W` and
/// flushes immediately.
pub struct Interpreter<P, I, W> {
    source: Source<P>,
    input: Bytes<I>,
    output: W,
    tape: Tape,
    stack: ControlStack,
    cache: LoopCache,
    state: State,
    config: Config,
    steps: u64,
    output_bytes: u64,
    unclosed_loops: usize,
}

impl<P: Read, I: Read, W: Write> Interpreter<P, I, W> {
    pub fn new(program: P, input: I, output: W, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source: Source::new(program),
            input: input.bytes(),
            output,
            tape: Tape::new(config.tape_size, config.boundary),
            stack: ControlStack::new(),
            cache: LoopCache::new(),
            state: State::Running,
            config,
            steps: 0,
            output_bytes: 0,
            unclosed_loops: 0,
        })
    }

    /// Run until the program ends or an error is raised.
    pub fn run(&mut self) -> Result<Summary> {
        while self.step()? != State::Halted {}
        let summary = self.summary();
        debug!(
            steps = summary.steps,
            output_bytes = summary.output_bytes,
            program_bytes = summary.program_bytes,
            "program finished"
        );
        Ok(summary)
    }

    /// Fetch and handle exactly one token. Any error halts the interpreter.
    pub fn step(&mut self) -> Result<State> {
        let result = match self.state {
            State::Halted => return Ok(State::Halted),
            State::Running => self.execute_next(),
            State::SkippingLoop { depth } => self.skip_next(depth),
        };
        if result.is_err() {
            self.state = State::Halted;
        }
        result.map(|()| self.state)
    }

    fn fetch(&mut self) -> Result<Option<Op>> {
        if self.cache.is_active() {
            self.cache.fetch_next(&mut self.source)
        } else {
            self.source.next_token()
        }
    }

    fn execute_next(&mut self) -> Result<()> {
        let Some(op) = self.fetch()? else {
            self.halt(self.stack.depth());
            return Ok(());
        };
        self.steps += 1;
        trace!(
            %op,
            pc = self.cache.cursor(),
            cursor = self.tape.cursor(),
            cell = self.tape.get(),
            "dispatch"
        );

        match op {
            Op::Inc => self.tape.increment(),
            Op::Dec => self.tape.decrement(),
            Op::Right => self.tape.move_right()?,
            Op::Left => self.tape.move_left()?,
            Op::Read => {
                let value = self.read_input()?;
                self.tape.set(value);
            }
            Op::Write => self.write_output()?,
            Op::Open => {
                if self.tape.get() == 0 {
                    self.state = State::SkippingLoop { depth: 1 };
                } else {
                    let position = if self.cache.is_active() {
                        self.cache.last_position()
                    } else {
                        self.cache.begin(Op::Open)
                    };
                    self.stack.push(position);
                    debug!(position, depth = self.stack.depth(), "enter loop");
                }
            }
            Op::Close => {
                let position = self.stack.pop().map_err(|source| Error::ControlFlow {
                    offset: self.source.offset().saturating_sub(1),
                    source,
                })?;
                if self.tape.get() != 0 {
                    self.cache.rewind(position);
                } else if self.stack.is_empty() {
                    debug!(recorded = self.cache.len(), "leave top-level loop");
                    self.cache.reset();
                }
            }
        }
        Ok(())
    }

    fn skip_next(&mut self, depth: usize) -> Result<()> {
        let Some(op) = self.fetch()? else {
            self.halt(self.stack.depth() + depth);
            return Ok(());
        };
        let depth = match op {
            Op::Open => depth + 1,
            Op::Close => depth - 1,
            _ => depth,
        };
        self.state = if depth == 0 {
            State::Running
        } else {
            State::SkippingLoop { depth }
        };
        Ok(())
    }

    fn halt(&mut self, unclosed_loops: usize) {
        debug_assert!(self.source.is_exhausted());
        if unclosed_loops > 0 {
            warn!(unclosed_loops, "program ended inside a loop");
        }
        self.unclosed_loops = unclosed_loops;
        self.state = State::Halted;
    }

    fn read_input(&mut self) -> Result<u8> {
        match self.input.next() {
            Some(Ok(byte)) => Ok(self.config.input_transform.apply(byte)),
            Some(Err(source)) => Err(Error::SourceUnavailable {
                stream: Stream::Input,
                source,
            }),
            None => Ok(self.config.eof_value),
        }
    }

    fn write_output(&mut self) -> Result<()> {
        self.output
            .write_all(&[self.tape.get()])
            .and_then(|()| self.output.flush())
            .map_err(Error::SinkUnavailable)?;
        self.output_bytes += 1;
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            steps: self.steps,
            output_bytes: self.output_bytes,
            unclosed_loops: self.unclosed_loops,
            program_bytes: self.source.offset(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of loops currently entered.
    pub fn loop_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Number of tokens held in the loop cache.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
