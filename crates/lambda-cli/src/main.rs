//! Lambda interpreter CLI
//!
//! Loads any definition files given on the command line, then drops
//! into an interactive read-eval-print loop. See [`lambda_cli::repl`]
//! for the in-session commands.

use clap::Parser;
use lambda_cli::repl::{Control, Repl};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lambda")]
#[command(about = "Untyped lambda calculus interpreter")]
#[command(version)]
struct Cli {
    /// Definition files to load at startup (reloadable with :r)
    files: Vec<PathBuf>,

    /// Bound on reduction steps per evaluation
    #[arg(long, default_value_t = lambda_eval::DEFAULT_STEP_LIMIT)]
    step_limit: u32,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut repl = Repl::new(cli.step_limit);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in cli.files {
        repl.load(path, &mut out)?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, ">>")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        if repl.execute(&line?, &mut out)? == Control::Exit {
            break;
        }
    }
    Ok(())
}
