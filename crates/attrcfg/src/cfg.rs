//! Config table: single parse pass plus typed lookups.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::arena::StrArena;
use crate::attr::AttrTable;
use crate::num;
use crate::scanner::Scanner;
use crate::Result;

/// A parsed configuration file.
///
/// Built in one pass over a `key: value` file and immutable afterwards.
/// Keys and values live null-terminated in a shared string arena; lookups
/// binary-search a key-sorted attribute table of offsets into it. Dropping
/// the table releases both containers.
#[derive(Debug)]
pub struct Cfg {
    arena: StrArena,
    attrs: AttrTable,
}

impl Cfg {
    /// Parse a config file from disk.
    ///
    /// The file handle is owned by this call and closed on every path,
    /// including a parse that fails partway through.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse config text from any byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut arena = StrArena::new();
        let mut attrs = AttrTable::new();
        Scanner::new(reader).run(&mut arena, &mut attrs)?;
        Ok(Self { arena, attrs })
    }

    /// Number of attributes in the table.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Check if the table holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.len() == 0
    }

    /// Check whether `key` is present, whatever its value (an empty value
    /// still counts).
    pub fn has(&self, key: &str) -> bool {
        self.get_bytes(key).is_some()
    }

    /// Raw bytes of the value for `key`, or `None` when absent.
    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        self.attrs
            .lookup(&self.arena, key.as_bytes())
            .map(|val| self.arena.get(val))
    }

    /// Value for `key` as a string, or `default` when the key is absent or
    /// the stored bytes are not valid UTF-8.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_bytes(key)
            .and_then(|val| std::str::from_utf8(val).ok())
            .unwrap_or(default)
    }

    /// Value for `key` as a signed integer, or `default` when the key is
    /// absent or the value has no leading digits.
    ///
    /// Accepts `0x` hex and leading-`0` octal prefixes, otherwise decimal.
    /// Trailing garbage after the digits is ignored.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_bytes(key)
            .and_then(num::parse_signed)
            .unwrap_or(default)
    }

    /// Unsigned counterpart of [`get_int`](Self::get_int). A leading `-`
    /// wraps into the unsigned range, as `strtoull` does.
    pub fn get_uint(&self, key: &str, default: u64) -> u64 {
        self.get_bytes(key)
            .and_then(num::parse_unsigned)
            .unwrap_or(default)
    }

    /// All key/value pairs, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.attrs
            .as_slice()
            .iter()
            .map(|attr| (self.arena.get(attr.key), self.arena.get(attr.val)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(input: &[u8]) -> Cfg {
        Cfg::from_reader(input).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let cfg = parse(b"foo: bar\n");
        assert!(cfg.has("foo"));
        assert_eq!(cfg.get("foo", ""), "bar");
    }

    #[test]
    fn test_empty_inputs_give_empty_table() {
        for input in [&b""[..], b"\n\n\n", b"# a\n# b\n", b"bare\nalso-bare\n"] {
            let cfg = parse(input);
            assert!(cfg.is_empty());
            assert!(!cfg.has("anything"));
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(b"present: yes\n");
        assert_eq!(cfg.get("missing", "fallback"), "fallback");
        assert_eq!(cfg.get_int("missing", -1), -1);
        assert_eq!(cfg.get_uint("missing", 7), 7);
        assert!(!cfg.has("missing"));
    }

    #[test]
    fn test_numeric_coercion() {
        let cfg = parse(b"dec: 42\nhex: 0x2A\noct: 052\nbad: abc\nmixed: 42abc\n");
        assert_eq!(cfg.get_int("dec", -1), 42);
        assert_eq!(cfg.get_int("hex", -1), 42);
        assert_eq!(cfg.get_int("oct", -1), 42);
        assert_eq!(cfg.get_int("bad", -1), -1);
        assert_eq!(cfg.get_int("mixed", -1), 42);
        assert_eq!(cfg.get_uint("dec", 0), 42);
    }

    #[test]
    fn test_unsigned_wrap() {
        let cfg = parse(b"neg: -1\n");
        assert_eq!(cfg.get_uint("neg", 0), u64::MAX);
        assert_eq!(cfg.get_int("neg", 0), -1);
    }

    #[test]
    fn test_many_entries_round_trip() {
        let mut input = Vec::new();
        for i in 0..128 {
            input.extend_from_slice(format!("key{:03}: value{:03}\n", i, i).as_bytes());
        }

        // Well past the initial 4-entry table and 16-byte arena.
        let cfg = parse(&input);
        assert_eq!(cfg.len(), 128);
        for i in 0..128 {
            let key = format!("key{:03}", i);
            assert!(cfg.has(&key));
            assert_eq!(cfg.get(&key, ""), format!("value{:03}", i));
        }
    }

    #[test]
    fn test_entries_sorted_by_key() {
        let cfg = parse(b"zebra: 1\napple: 2\nmango: 3\nbanana: 4\n");
        let keys: Vec<&[u8]> = cfg.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, [&b"apple"[..], b"banana", b"mango", b"zebra"]);
    }

    #[test]
    fn test_scenario_file() {
        let cfg = parse(b"# comment\nname: littlefs\nversion  :  2\nflag\nempty:\n");
        assert!(cfg.has("name"));
        assert_eq!(cfg.get("name", ""), "littlefs");
        assert_eq!(cfg.get_int("version", 0), 2);
        assert!(!cfg.has("flag"));
        assert!(cfg.has("empty"));
        assert_eq!(cfg.get("empty", "x"), "");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("attrcfg-test-{}.cfg", std::process::id()));
        std::fs::write(&path, b"block_size: 512\nblock_count: 1024\n").unwrap();

        let cfg = Cfg::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.get_uint("block_size", 0), 512);
        assert_eq!(cfg.get_uint("block_count", 0), 1024);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("attrcfg-no-such-file.cfg");
        let err = Cfg::from_file(&path).unwrap_err();
        match err {
            Error::Io(e) => assert!(e.raw_os_error().is_some()),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_value_falls_back() {
        let cfg = parse(b"raw: \xff\xfe\n");
        assert!(cfg.has("raw"));
        assert_eq!(cfg.get_bytes("raw"), Some(&b"\xff\xfe"[..]));
        assert_eq!(cfg.get("raw", "fallback"), "fallback");
    }
}
