//! Append-only string arena.
//!
//! Every key and value string lives back-to-back in one flat byte buffer,
//! each terminated by a null byte. Attributes name strings by offset rather
//! than by reference, so the buffer is free to reallocate as it grows
//! without invalidating anything.

use crate::Result;

/// Flat byte store for null-terminated strings.
#[derive(Debug)]
pub(crate) struct StrArena {
    buf: Vec<u8>,
}

impl StrArena {
    /// Initial capacity in bytes.
    const INITIAL_CAPACITY: usize = 16;

    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Logical length, which is also the offset the next string starts at.
    #[inline]
    pub fn len(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Append one byte, doubling capacity when full.
    pub fn push(&mut self, b: u8) -> Result<()> {
        if self.buf.len() == self.buf.capacity() {
            // Amortize double
            self.buf
                .try_reserve_exact(self.buf.capacity().max(Self::INITIAL_CAPACITY))?;
        }
        self.buf.push(b);
        Ok(())
    }

    /// Close the string currently being appended.
    pub fn push_terminator(&mut self) -> Result<()> {
        self.push(0)
    }

    /// Rewind to `offset`, discarding everything appended after it.
    pub fn truncate(&mut self, offset: u32) {
        self.buf.truncate(offset as usize);
    }

    /// The null-terminated string starting at `offset`, terminator excluded.
    /// Uses memchr to locate the terminator.
    pub fn get(&self, offset: u32) -> &[u8] {
        let start = offset as usize;
        debug_assert!(start <= self.buf.len());
        let end = memchr::memchr(0, &self.buf[start..]).map_or(self.buf.len(), |i| start + i);
        &self.buf[start..end]
    }
}
