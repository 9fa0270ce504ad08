//! Move sources.

use derive_more::{Display, Error, From};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{debug, instrument, trace};

/// Failure to obtain a move from the player.
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// The token is not a base-10 integer.
    #[display("Non-numeric input: {:?}", token)]
    NonNumeric {
        /// The offending token.
        token: String,
    },

    /// The input ended before a move was entered.
    #[display("Input closed before a move was entered")]
    Closed,

    /// Reading the input failed.
    #[display("Failed to read input: {}", _0)]
    #[from]
    Io(#[error(not(source))] std::io::Error),
}

/// Somewhere moves come from.
pub trait MoveSource {
    /// Returns the next requested cell index, as typed.
    ///
    /// The value is not range-checked; negative numbers are passed through
    /// so the caller can report them as off the board.
    fn next_move(&mut self) -> Result<i64, InputError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// Reads whitespace-separated tokens from a buffered reader.
///
/// Several tokens on one line are consumed one per move, in order.
pub struct ConsoleInput<R> {
    name: String,
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ConsoleInput<R> {
    /// Creates a move source over `reader`.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading more lines as needed.
    #[instrument(level = "trace", skip(self), fields(source = %self.name))]
    fn next_token(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("End of input");
                return Err(InputError::Closed);
            }
            trace!(line = line.trim_end(), "Read line");
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead> MoveSource for ConsoleInput<R> {
    fn next_move(&mut self) -> Result<i64, InputError> {
        let token = self.next_token()?;
        token
            .parse::<i64>()
            .map_err(|_| InputError::NonNumeric { token })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn input(text: &str) -> ConsoleInput<Cursor<Vec<u8>>> {
        ConsoleInput::new("test", Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_one_number_per_line() {
        let mut source = input("5\n12\n");
        assert_eq!(source.next_move().unwrap(), 5);
        assert_eq!(source.next_move().unwrap(), 12);
        assert!(matches!(source.next_move(), Err(InputError::Closed)));
    }

    #[test]
    fn test_splits_tokens_on_whitespace() {
        let mut source = input("  3\t7 \n\n  +1");
        assert_eq!(source.next_move().unwrap(), 3);
        assert_eq!(source.next_move().unwrap(), 7);
        assert_eq!(source.next_move().unwrap(), 1);
    }

    #[test]
    fn test_negative_numbers_pass_through() {
        let mut source = input("-2\n");
        assert_eq!(source.next_move().unwrap(), -2);
    }

    #[test]
    fn test_non_numeric_token_is_rejected() {
        let mut source = input("five\n");
        match source.next_move() {
            Err(InputError::NonNumeric { token }) => assert_eq!(token, "five"),
            other => panic!("Expected NonNumeric, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_closed() {
        let mut source = input("");
        assert!(matches!(source.next_move(), Err(InputError::Closed)));
        assert_eq!(source.name(), "test");
    }
}
