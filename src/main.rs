use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use streambf::{BoundaryPolicy, Config, InputTransform, Interpreter, Summary, logging};
use tracing::debug;

#[derive(Parser)]
#[command(name = "streambf", about = "Streaming interpreter for tape programs")]
struct Cli {
    /// File containing the program.
    #[arg(short = 'f', long = "file", default_value = "program.bf")]
    file: PathBuf,

    /// File supplying bytes for `,` (defaults to stdin).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of tape cells.
    #[arg(long, default_value_t = 30_000, value_parser = clap::value_parser!(u64).range(1..))]
    tape_size: u64,

    /// Cursor behaviour at the tape ends.
    #[arg(long, value_enum, default_value_t = BoundaryPolicy::Wrap)]
    boundary: BoundaryPolicy,

    /// Transform applied to bytes read by `,`.
    #[arg(long, value_enum, default_value_t = InputTransform::Identity)]
    input_transform: InputTransform,

    /// Cell value stored by `,` once input is exhausted.
    #[arg(long, default_value_t = 0)]
    eof_value: u8,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("streambf: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let program = File::open(&cli.file)
        .with_context(|| format!("could not open program {}", cli.file.display()))?;

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("could not open input {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let config = Config {
        tape_size: usize::try_from(cli.tape_size).context("tape size does not fit in memory")?,
        boundary: cli.boundary,
        input_transform: cli.input_transform,
        eof_value: cli.eof_value,
    };

    let mut interpreter =
        Interpreter::new(BufReader::new(program), input, io::stdout().lock(), config)?;
    let summary = interpreter
        .run()
        .with_context(|| format!("failed to execute {}", cli.file.display()))?;
    Ok(summary)
}
