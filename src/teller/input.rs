use std::io::BufRead;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::teller::errors::SessionError;

/// Reads whitespace-separated tokens and whole lines from a buffered reader.
///
/// Numbers may share a line (`1 2 300` answers three prompts) or come one per
/// line; a name is read as the rest of the current line.
pub struct Scanner<R> {
    reader: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Returns the unread part of the current line, or the next line if the
    /// current one is used up. The line terminator is stripped.
    pub fn next_line(&mut self, expected: &'static str) -> Result<String, SessionError> {
        if self.remaining().trim().is_empty() && !self.fill()? {
            return Err(SessionError::UnexpectedEof { expected });
        }

        let rest = self.remaining().trim_end_matches(['\r', '\n']).to_string();
        self.cursor = self.line.len();
        Ok(rest)
    }

    pub fn next_token(&mut self, expected: &'static str) -> Result<String, SessionError> {
        loop {
            let rest = self.remaining();
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.cursor + (rest.len() - trimmed.len());
                let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                self.cursor = start + len;
                return Ok(self.line[start..start + len].to_string());
            }

            if !self.fill()? {
                return Err(SessionError::UnexpectedEof { expected });
            }
        }
    }

    pub fn next_int(&mut self, expected: &'static str) -> Result<i64, SessionError> {
        let token = self.next_token(expected)?;
        i64::from_str(&token).map_err(|_| SessionError::InvalidNumber { input: token, expected })
    }

    /// Accepts plain decimals (`250`, `-12.5`) and scientific notation (`1e3`).
    pub fn next_amount(&mut self, expected: &'static str) -> Result<Decimal, SessionError> {
        let token = self.next_token(expected)?;
        Decimal::from_str(&token)
            .or_else(|_| Decimal::from_scientific(&token))
            .map_err(|_| SessionError::InvalidNumber { input: token, expected })
    }

    fn remaining(&self) -> &str {
        &self.line[self.cursor..]
    }

    fn fill(&mut self) -> Result<bool, SessionError> {
        self.line.clear();
        self.cursor = 0;
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }
}
