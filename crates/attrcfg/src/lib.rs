//! Line-oriented `key: value` configuration parser.
//!
//! Parses a minimal INI-like format in one pass over a file: comments and
//! blank lines are skipped, each `key: value` line becomes an attribute,
//! and lookups afterwards are O(log n). All key and value text is stored
//! null-terminated in a single append-only arena; the attribute table
//! holds key-sorted offsets into it, so the arena can grow freely during
//! the parse without invalidating entries.
//!
//! # File format
//!
//! ```text
//! # comments run to end of line
//! block_size: 512
//! block_count  :  1024    # whitespace around ':' is fine
//! root: /tmp/blocks
//! ```
//!
//! Keys and values are runs of non-whitespace bytes; a value stops at the
//! first whitespace or `#`. A bare key with no `:` produces no entry.
//!
//! # Example
//!
//! ```no_run
//! use attrcfg::Cfg;
//!
//! let cfg = Cfg::from_file("test.cfg")?;
//!
//! let block_size = cfg.get_uint("block_size", 512);
//! let root = cfg.get("root", ".");
//! if cfg.has("read_only") {
//!     // presence alone can carry meaning; the value may be empty
//! }
//! # Ok::<(), attrcfg::Error>(())
//! ```
//!
//! Numeric accessors coerce with `strtol`-style semantics (`0x` hex,
//! leading-`0` octal, trailing garbage ignored) and fall back to the
//! caller's default when the key is absent or the value has no digits.

mod arena;
mod attr;
mod cfg;
mod error;
mod num;
mod scanner;

pub use cfg::Cfg;
pub use error::{Error, Result};
