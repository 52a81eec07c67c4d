//! Tokenizing scanner: one pass over a byte stream that populates the
//! string arena and the attribute table.
//!
//! The scanner is byte-oriented and line-oriented. Per line it skips
//! leading whitespace, reads a key token, and, if a `:` follows, reads a
//! value token and records the pair. Comment lines (`#`) and bare tokens
//! with no `:` produce no entry. A key read for a bare token is rewound
//! out of the arena so the next line starts clean.

use std::io::Read;

use crate::arena::StrArena;
use crate::attr::AttrTable;
use crate::Result;

/// Horizontal whitespace: space, tab, vertical tab, form feed.
#[inline]
fn is_hspace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0b' | b'\x0c')
}

#[inline]
fn is_eol(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

/// A byte stream with one byte of pushback.
struct ByteStream<R: Read> {
    inner: std::io::Bytes<R>,
    peeked: Option<u8>,
}

impl<R: Read> ByteStream<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.bytes(),
            peeked: None,
        }
    }

    /// Look at the next byte without consuming it. `None` at end of stream.
    fn peek(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.inner.next().transpose()?;
        }
        Ok(self.peeked)
    }

    /// Consume and return the next byte.
    fn bump(&mut self) -> Result<Option<u8>> {
        match self.peeked.take() {
            Some(b) => Ok(Some(b)),
            None => Ok(self.inner.next().transpose()?),
        }
    }
}

/// Parser state for one scan pass.
pub(crate) struct Scanner<R: Read> {
    stream: ByteStream<R>,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            stream: ByteStream::new(reader),
        }
    }

    /// Run the scan to completion, filling `arena` and `table`.
    pub fn run(&mut self, arena: &mut StrArena, table: &mut AttrTable) -> Result<()> {
        loop {
            self.skip_hspace()?;

            match self.stream.peek()? {
                None => return Ok(()),
                // Comment or blank line: no token extraction.
                Some(b) if b == b'#' || is_eol(b) => {}
                Some(_) => self.scan_pair(arena, table)?,
            }

            // Discard the rest of the line, terminator included.
            loop {
                match self.stream.bump()? {
                    None => return Ok(()),
                    Some(b) if is_eol(b) => break,
                    Some(_) => {}
                }
            }
        }
    }

    /// Scan one key token and, if a `:` follows, its value token.
    fn scan_pair(&mut self, arena: &mut StrArena, table: &mut AttrTable) -> Result<()> {
        let key = arena.len();
        while let Some(b) = self.stream.peek()? {
            if is_hspace(b) || is_eol(b) || b == b':' || b == b'#' {
                break;
            }
            self.stream.bump()?;
            arena.push(b)?;
        }
        arena.push_terminator()?;

        self.skip_hspace()?;

        if self.stream.peek()? != Some(b':') {
            // Bare token: undo the key append, no entry for this line.
            arena.truncate(key);
            return Ok(());
        }
        self.stream.bump()?;
        self.skip_hspace()?;

        let val = arena.len();
        while let Some(b) = self.stream.peek()? {
            if is_hspace(b) || is_eol(b) || b == b'#' {
                break;
            }
            self.stream.bump()?;
            arena.push(b)?;
        }
        arena.push_terminator()?;

        table.insert(arena, key, val)
    }

    fn skip_hspace(&mut self) -> Result<()> {
        while let Some(b) = self.stream.peek()? {
            if !is_hspace(b) {
                break;
            }
            self.stream.bump()?;
        }
        Ok(())
    }
}
