use std::collections::VecDeque;
use std::io::BufRead;

use crate::GameError;

/// Whitespace-delimited reader over a line-buffered stream.
///
/// Input left on a line after a read stays queued, so `ff` typed on one
/// line counts as two choices.
pub struct Console<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> Console<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    /// Next non-whitespace character.
    pub fn read_char(&mut self) -> Result<char, GameError> {
        self.skip_whitespace()?;
        self.pending.pop_front().ok_or(GameError::InputClosed)
    }

    /// Next whitespace-delimited token.
    pub fn read_token(&mut self) -> Result<String, GameError> {
        self.skip_whitespace()?;
        let mut token = String::new();
        while let Some(&c) = self.pending.front() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.pending.pop_front();
        }
        if token.is_empty() {
            return Err(GameError::InputClosed);
        }
        Ok(token)
    }

    fn skip_whitespace(&mut self) -> Result<(), GameError> {
        loop {
            while self.pending.front().is_some_and(|c| c.is_whitespace()) {
                self.pending.pop_front();
            }
            if !self.pending.is_empty() {
                return Ok(());
            }
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(());
            }
            // Undecodable bytes become U+FFFD and read as unknown choices.
            self.pending.extend(String::from_utf8_lossy(&line).chars());
        }
    }
}
