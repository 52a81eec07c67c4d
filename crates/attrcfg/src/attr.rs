//! Attribute entries and the key-sorted attribute table.

use crate::arena::StrArena;
use crate::Result;

/// A parsed key/value pair, stored as offsets into the string arena.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Attr {
    /// Arena offset of the key string.
    pub key: u32,
    /// Arena offset of the value string.
    pub val: u32,
}

/// Key-sorted array of attributes enabling binary-search lookup.
///
/// Comparisons always go through the shared arena; the table itself only
/// holds offsets. Duplicate keys are not rejected: all of them are stored
/// and the sort order is maintained, but which one a lookup finds depends
/// on where the binary search lands.
#[derive(Debug)]
pub(crate) struct AttrTable {
    attrs: Vec<Attr>,
}

impl AttrTable {
    /// Initial capacity in entries.
    const INITIAL_CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self {
            attrs: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Insert a pair, keeping the table sorted by key string.
    ///
    /// Linear scan plus shift, O(n) per insert. Only runs during the
    /// one-time parse pass; lookups stay O(log n).
    pub fn insert(&mut self, arena: &StrArena, key: u32, val: u32) -> Result<()> {
        if self.attrs.len() == self.attrs.capacity() {
            // Amortize double
            self.attrs
                .try_reserve_exact(self.attrs.capacity().max(Self::INITIAL_CAPACITY))?;
        }

        let new_key = arena.get(key);
        let at = self
            .attrs
            .iter()
            .position(|attr| arena.get(attr.key) >= new_key)
            .unwrap_or(self.attrs.len());

        self.attrs.insert(at, Attr { key, val });
        Ok(())
    }

    /// Binary search for `key`, returning the value offset on an exact match.
    pub fn lookup(&self, arena: &StrArena, key: &[u8]) -> Option<u32> {
        self.attrs
            .binary_search_by(|attr| arena.get(attr.key).cmp(key))
            .ok()
            .map(|i| self.attrs[i].val)
    }

    /// Attributes in key order.
    pub fn as_slice(&self) -> &[Attr] {
        &self.attrs
    }
}
