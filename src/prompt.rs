//! Yes/no confirmation before destructive operations

use std::io::{self, BufRead, IsTerminal, Write};

use inquire::InquireError;

use crate::error::ServiceError;

pub trait Confirmer {
    /// Ask `question`; `Ok(true)` only on an explicit affirmative answer
    fn confirm(&mut self, question: &str) -> Result<bool, ServiceError>;
}

/// Interpret a typed answer. `None` means the answer was not understood.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Reads one line per question. Used when stdin is not a terminal and in
/// tests.
pub struct LineConfirmer<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, ServiceError> {
        write!(self.writer, "{question} [y/n]> ")
            .and_then(|_| self.writer.flush())
            .map_err(|e| ServiceError::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| ServiceError::Prompt(e.to_string()))?;
        if read == 0 {
            log::debug!("stdin closed before an answer was given");
            return Ok(false);
        }

        let answer = parse_answer(&line);
        if answer.is_none() {
            log::debug!("Unrecognised answer {:?}, treating as no", line.trim());
        }
        Ok(answer.unwrap_or(false))
    }
}

/// Interactive prompt for terminals
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, question: &str) -> Result<bool, ServiceError> {
        match inquire::Confirm::new(question).with_default(false).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(ServiceError::Prompt(e.to_string())),
        }
    }
}

/// Confirmer reading from the process' stdin
pub fn stdin_confirmer() -> Box<dyn Confirmer> {
    if io::stdin().is_terminal() {
        Box::new(TerminalConfirmer)
    } else {
        Box::new(LineConfirmer::new(io::stdin().lock(), io::stdout()))
    }
}
