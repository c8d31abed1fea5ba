use std::fs;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use checkers_core::{read_board, render_board, CheckersError};
use checkers_engine::solve;

const DEFAULT_MAX_DEPTH: u32 = 100;
const DEFAULT_MAX_TIME_SECONDS: u64 = 110;

#[derive(Parser)]
#[command(name = "solve", about = "Solves a checkers endgame position")]
struct Args {
    #[arg(long)]
    inputfile: String,

    #[arg(long)]
    outputfile: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse board from '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: CheckersError,
    },
}

fn run(args: Args) -> Result<(), CliError> {
    let contents = fs::read_to_string(&args.inputfile).map_err(|source| CliError::Read {
        path: args.inputfile.clone(),
        source,
    })?;

    let board = read_board(&contents).map_err(|source| CliError::Parse {
        path: args.inputfile.clone(),
        source,
    })?;

    let line = solve(board, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TIME_SECONDS);

    // Each board's own text already ends in a newline (one per row); an
    // extra newline after it yields the blank line the source's
    // `str(board) + "\n"` produces between boards in the output file. This
    // is distinct from the "---\n" convention used for in-process
    // stringified buffers, which the CLI does not need.
    let mut output = String::new();
    for board in &line {
        output.push_str(&render_board(board));
        output.push('\n');
    }

    fs::write(&args.outputfile, output).map_err(|source| CliError::Write {
        path: args.outputfile.clone(),
        source,
    })?;

    println!("found a line of {} position(s), written to {}", line.len(), args.outputfile);

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
