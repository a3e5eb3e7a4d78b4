use std::io::BufRead;

use logos::Logos;
use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::lexer::Token,
};

/// A stream of tokens read lazily from a line-oriented character source.
///
/// Input is pulled one line at a time and the unread rest of the current
/// line is lexed one token per [`TokenStream::get`] call, so a statement may
/// span several lines and a line may hold several statements. At most one
/// token can be pushed back.
pub struct TokenStream<R> {
    reader:    R,
    /// The line currently being lexed.
    line:      String,
    /// Byte offset of the first unread character of `line`.
    pos:       usize,
    line_no:   usize,
    exhausted: bool,
    buffer:    Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream over `reader`. Nothing is read until the first
    /// token is requested.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               line: String::new(),
               pos: 0,
               line_no: 0,
               exhausted: false,
               buffer: None }
    }

    /// Returns the next token.
    ///
    /// A pushed-back token is returned first. Once the source is exhausted
    /// every call yields [`Token::End`].
    ///
    /// # Errors
    /// - `BadToken` if the next character cannot start a token. The
    ///   character is consumed.
    /// - `Io` if reading the source fails.
    pub fn get(&mut self) -> CalcResult<Token> {
        if let Some(token) = self.buffer.take() {
            return Ok(token);
        }

        loop {
            let lexed = {
                let mut lexer = Token::lexer(&self.line[self.pos..]);
                lexer.next().map(|result| (result, lexer.span()))
            };
            match lexed {
                Some((Ok(token), span)) => {
                    self.pos += span.end;
                    let token = token.classify_word();
                    trace!(line = self.line_no, %token, "token");
                    return Ok(token);
                },
                Some((Err(()), span)) => {
                    self.pos += span.start;
                    // Consume exactly the offending character.
                    let found = self.line[self.pos..].chars().next().unwrap_or('\u{fffd}');
                    self.pos = (self.pos + found.len_utf8()).min(self.line.len());
                    return Err(CalcError::BadToken { found });
                },
                None => {
                    if !self.next_line()? {
                        return Ok(Token::End);
                    }
                },
            }
        }
    }

    /// Stores `token` so that the next [`TokenStream::get`] returns it.
    ///
    /// # Errors
    /// Returns `BufferFull` if a token is already buffered.
    pub fn putback(&mut self, token: Token) -> CalcResult<()> {
        if self.buffer.is_some() {
            return Err(CalcError::BufferFull);
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// Discards input up to and including the next `marker` character.
    ///
    /// If the buffered token is the marker it alone is discarded. Otherwise
    /// the buffer is cleared and raw characters are skipped, across lines,
    /// until the marker is consumed or the source is exhausted.
    ///
    /// # Errors
    /// Returns `Io` if reading the source fails.
    pub fn ignore(&mut self, marker: char) -> CalcResult<()> {
        if self.buffer.take().is_some_and(|t| t.symbol() == Some(marker)) {
            return Ok(());
        }

        loop {
            if let Some(offset) = self.line[self.pos..].find(marker) {
                self.pos += offset + marker.len_utf8();
                return Ok(());
            }
            if !self.next_line()? {
                return Ok(());
            }
        }
    }

    /// Returns `true` when serving another token requires reading a new line.
    pub fn needs_input(&self) -> bool {
        self.buffer.is_none() && self.line[self.pos..].trim().is_empty()
    }

    /// Returns the 1-based number of the line currently being lexed.
    pub const fn line(&self) -> usize {
        self.line_no
    }

    /// Replaces the current line with the next one from the source.
    /// Returns `false` once the source is exhausted.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, which the lexer then
    /// reports as a bad token.
    fn next_line(&mut self) -> CalcResult<bool> {
        self.line.clear();
        self.pos = 0;
        if self.exhausted {
            return Ok(false);
        }
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        self.line.push_str(&String::from_utf8_lossy(&bytes));
        self.line_no += 1;
        Ok(true)
    }
}
