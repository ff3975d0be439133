//! REPL engine
//!
//! Line-at-a-time command dispatch, separated from terminal I/O so the
//! same engine drives both interactive sessions and file loading (and
//! the tests).
//!
//! Commands:
//!
//! - `:l <file>...` load definition files (appended to the reload list)
//! - `:r` reload every file loaded so far
//! - `:s <expr>` evaluate with the step trace printed
//! - `:e` exit

use lambda_core::parse_item;
use lambda_eval::{Evaluator, StepLog};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct Repl {
    evaluator: Evaluator,
    /// Files loaded so far, in load order; `:r` replays them.
    files: Vec<PathBuf>,
}

impl Repl {
    pub fn new(step_limit: u32) -> Self {
        Repl {
            evaluator: Evaluator::with_step_limit(step_limit),
            files: Vec::new(),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Handle one input line: a shell command if it starts with `:`,
    /// otherwise a term to evaluate. Output goes to `out`.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> std::io::Result<Control> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Ok(Control::Continue);
        }

        if let Some(command) = line.strip_prefix(':') {
            return self.execute_command(command, out);
        }

        self.interpret(line, false, out)?;
        Ok(Control::Continue)
    }

    fn execute_command(&mut self, command: &str, out: &mut dyn Write) -> std::io::Result<Control> {
        let (head, rest) = command.split_at(command.len().min(1));
        match head {
            "l" => {
                let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
                if paths.is_empty() {
                    writeln!(out, "at least one filepath must be given")?;
                } else {
                    for path in paths {
                        self.load(path, out)?;
                    }
                }
            }
            "r" => {
                let files = self.files.clone();
                for path in &files {
                    self.load_file(path, out)?;
                }
            }
            "s" => {
                self.interpret(rest, true, out)?;
            }
            "e" => return Ok(Control::Exit),
            _ => writeln!(out, "unrecognized command :{head}")?,
        }
        Ok(Control::Continue)
    }

    /// Load a file and remember it for `:r`.
    pub fn load(&mut self, path: PathBuf, out: &mut dyn Write) -> std::io::Result<()> {
        self.load_file(&path, out)?;
        self.files.push(path);
        Ok(())
    }

    /// Load a definition file, echoing each line as it executes. A
    /// missing or unreadable file is reported, not fatal.
    pub fn load_file(&mut self, path: &PathBuf, out: &mut dyn Write) -> std::io::Result<()> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                writeln!(out, "cannot load {}: {err}", path.display())?;
                return Ok(());
            }
        };

        writeln!(out, "---------- Loading file: {} ----------", path.display())?;
        for line in contents.lines() {
            writeln!(out, ">>{line}")?;
            if self.execute(line, out)? == Control::Exit {
                break;
            }
        }
        writeln!(out, "---------- Loaded file: {} ----------", path.display())?;
        Ok(())
    }

    fn interpret(&mut self, input: &str, show_steps: bool, out: &mut dyn Write) -> std::io::Result<()> {
        let item = match parse_item(input) {
            Ok(Some(item)) => item,
            Ok(None) => return Ok(()),
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };

        if show_steps {
            let mut log = StepLog::new();
            let outcome = self.evaluator.eval_with_trace(&item, &mut log);
            writeln!(out, "eval sequence bottom up:")?;
            for step in log.steps() {
                for _ in 0..step.depth() {
                    write!(out, "\u{2502} ")?;
                }
                writeln!(out, "{step}")?;
            }
            writeln!(out, "{outcome}")?;
        } else {
            let outcome = self.evaluator.eval(&item);
            writeln!(out, "{outcome}")?;
        }
        Ok(())
    }
}
