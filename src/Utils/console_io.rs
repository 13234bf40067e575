/*
Console collaborator of the quadrature session: prompts for and reads scalars, emits result lines.
Generic over BufRead/Write so the same code drives stdin/stdout and in-memory buffers in tests.
*/
use crate::numerical::quad_errors::QuadError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Source of labelled floating-point values
pub trait ScalarSource {
    /// fails with QuadError::InputError on unreadable or malformed input
    fn read_scalar(&mut self, label: &str) -> Result<f64, QuadError>;
}

/// Destination of output lines
pub trait LineSink {
    /// fails with QuadError::IOError on a write fault
    fn emit_line(&mut self, line: &str) -> Result<(), QuadError>;
}

pub struct ConsoleIO<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    // whitespace-separated tokens already read but not consumed yet
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleIO<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleIO {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// give the writer back (tests inspect what was written)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_token(&mut self, label: &str) -> Result<String, QuadError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let bytes = self
                .reader
                .read_line(&mut line)
                .map_err(|error| input_error(label, error.to_string()))?;
            if bytes == 0 {
                return Err(input_error(label, "end of input".to_string()));
            }
            self.pending
                .extend(line.split_whitespace().map(|token| token.to_string()));
        }
    }
}

fn input_error(label: &str, reason: String) -> QuadError {
    QuadError::InputError {
        label: label.to_string(),
        reason,
    }
}

impl<R: BufRead, W: Write> ScalarSource for ConsoleIO<R, W> {
    fn read_scalar(&mut self, label: &str) -> Result<f64, QuadError> {
        self.emit_line(&format!("Enter {}:", label))?;
        let token = self.next_token(label)?;
        let value = token
            .parse::<f64>()
            .map_err(|_| input_error(label, format!("'{}' is not a number", token)))?;
        // inf and NaN parse fine but would break every interval comparison
        if !value.is_finite() {
            return Err(input_error(label, format!("'{}' is not a finite number", token)));
        }
        Ok(value)
    }
}

impl<R: BufRead, W: Write> LineSink for ConsoleIO<R, W> {
    fn emit_line(&mut self, line: &str) -> Result<(), QuadError> {
        let mut buffer = String::with_capacity(line.len() + 1);
        buffer.push_str(line);
        buffer.push('\n');
        self.writer.write_all(buffer.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
