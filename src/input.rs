//! Interactive collection of task parameters.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::constants::{MAX_PRIORITY, MIN_PRIORITY};
use crate::{Task, TaskSet};

/// Whitespace-separated tokens read lazily from a line-oriented input.
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(input: R) -> Self {
        Self { input, pending: VecDeque::new() }
    }

    /// Next token, reading further lines as needed. End of input is an
    /// `UnexpectedEof` error.
    pub fn next_token(&mut self) -> io::Result<String> {
        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before all tasks were entered"));
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Prompts on `output` until the next token parses to a value accepted by `valid`.
///
/// Non-numeric and out-of-range answers discard the rest of their line and
/// are re-prompted indefinitely.
pub fn prompt_value<T, R, W>(
    tokens: &mut Tokens<R>,
    output: &mut W,
    prompt: &str,
    retry: &str,
    valid: impl Fn(&T) -> bool,
) -> io::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    loop {
        match tokens.next_token()?.parse::<T>() {
            Ok(value) if valid(&value) => return Ok(value),
            _ => {
                tokens.discard_line();
                write!(output, "{}", retry)?;
                output.flush()?;
            }
        }
    }
}

/// Asks for a task count, then priority, burst time and deadline of each task.
pub fn prompt_tasks<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<TaskSet> {
    const POSITIVE: &str = "Invalid input. Please enter a positive integer: ";
    let mut tokens = Tokens::new(input);
    let tokens = &mut tokens;

    let count: usize = prompt_value(tokens, output, "Enter number of tasks: ", POSITIVE, |n: &usize| *n > 0)?;
    let mut taskset = TaskSet::new_empty();

    for _ in 0..count {
        let id = taskset.next_id();
        writeln!(output, "\nTask {} parameters:", id)?;

        let priority: u8 = prompt_value(
            tokens,
            output,
            "  Enter priority (1-10): ",
            "Invalid input. Please enter an integer between 1 and 10: ",
            |p: &u8| (MIN_PRIORITY..=MAX_PRIORITY).contains(p),
        )?;
        let burst: u32 = prompt_value(tokens, output, "  Enter burst time (ms): ", POSITIVE, |b: &u32| *b > 0)?;
        let deadline: u32 = prompt_value(tokens, output, "  Enter deadline (ms): ", POSITIVE, |d: &u32| *d > 0)?;

        let task = Task::new(id, priority, burst, deadline)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        taskset
            .add_task(task)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }

    Ok(taskset)
}
