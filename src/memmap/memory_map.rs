// Immutable backing buffer for configuration tables
// Built-in tables borrow static data; loaded tables share one allocation.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryMapError {
    #[error("Index out of bounds: {index} (map is {len} bytes)")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MemoryMapError>;

#[derive(Clone)]
enum Backing {
    Static(&'static [u8]),
    Shared(Arc<[u8]>),
}

/// Read-only byte storage behind a configuration table.
///
/// Cloning a `MemoryMap` never copies the underlying bytes.
#[derive(Clone)]
pub struct MemoryMap {
    data: Backing,
}

impl MemoryMap {
    /// Wrap data that lives for the whole program, such as a built-in table
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            data: Backing::Static(data),
        }
    }

    /// Take ownership of loaded bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Backing::Shared(Arc::from(data)),
        }
    }

    /// Get the size of the memory map
    pub fn len(&self) -> usize {
        self.get_packed().len()
    }

    /// Check if the memory map is empty
    pub fn is_empty(&self) -> bool {
        self.get_packed().is_empty()
    }

    /// Get a chunk of memory from @start for @length bytes
    /// If length is None, returns all data from @start to end
    pub fn get(&self, start: usize, length: Option<usize>) -> Result<&[u8]> {
        let data = self.get_packed();
        if start > data.len() {
            return Err(MemoryMapError::IndexOutOfBounds {
                index: start,
                len: data.len(),
            });
        }

        match length {
            Some(len) => {
                let end = start.checked_add(len).unwrap_or(usize::MAX);
                if end > data.len() {
                    return Err(MemoryMapError::IndexOutOfBounds {
                        index: end,
                        len: data.len(),
                    });
                }
                Ok(&data[start..end])
            }
            None => Ok(&data[start..]),
        }
    }

    /// Read the byte at @pos
    pub fn byte(&self, pos: usize) -> Result<u8> {
        let data = self.get_packed();
        data.get(pos)
            .copied()
            .ok_or(MemoryMapError::IndexOutOfBounds {
                index: pos,
                len: data.len(),
            })
    }

    /// Get the entire memory map as raw bytes
    pub fn get_packed(&self) -> &[u8] {
        match &self.data {
            Backing::Static(data) => data,
            Backing::Shared(data) => data,
        }
    }

    /// Get the entire memory map as owned Vec<u8>
    pub fn to_vec(&self) -> Vec<u8> {
        self.get_packed().to_vec()
    }

    /// True when both maps view the same storage
    pub fn shares_storage(&self, other: &MemoryMap) -> bool {
        std::ptr::eq(self.get_packed(), other.get_packed())
    }

    /// Get a printable hex representation of the memory map
    pub fn printable(&self, start: Option<usize>, end: Option<usize>) -> String {
        let data = self.get_packed();
        let end = end.unwrap_or(data.len()).min(data.len());
        let start = start.unwrap_or(0).min(end);

        hexdump(&data[start..end], start)
    }
}

impl From<Vec<u8>> for MemoryMap {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for MemoryMap {
    fn from(data: &'static [u8]) -> Self {
        Self::from_static(data)
    }
}

impl AsRef<[u8]> for MemoryMap {
    fn as_ref(&self) -> &[u8] {
        self.get_packed()
    }
}

impl PartialEq for MemoryMap {
    fn eq(&self, other: &Self) -> bool {
        self.get_packed() == other.get_packed()
    }
}

impl Eq for MemoryMap {}

impl fmt::Debug for MemoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.data {
            Backing::Static(_) => "static",
            Backing::Shared(_) => "shared",
        };
        write!(f, "MemoryMap({} bytes, {})", self.len(), kind)
    }
}

impl fmt::Display for MemoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryMap({} bytes)", self.len())
    }
}

/// Create a hex dump of bytes (similar to hexdump -C)
/// Offsets are printed relative to @base
fn hexdump(data: &[u8], base: usize) -> String {
    let mut output = String::new();

    for (i, chunk) in data.chunks(16).enumerate() {
        output.push_str(&format!("{:08x}  ", base + i * 16));

        for (j, byte) in chunk.iter().enumerate() {
            if j == 8 {
                output.push(' ');
            }
            output.push_str(&format!("{:02x} ", byte));
        }

        // Padding for incomplete lines
        for j in chunk.len()..16 {
            if j == 8 {
                output.push(' ');
            }
            output.push_str("   ");
        }

        output.push_str(" |");
        for byte in chunk {
            if (0x20..=0x7e).contains(byte) {
                output.push(*byte as char);
            } else {
                output.push('.');
            }
        }
        output.push_str("|\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: [u8; 5] = [3, 0xAA, 0xBB, 0xCC, 0x00];

    #[test]
    fn test_memory_map_creation() {
        let mmap = MemoryMap::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(mmap.len(), 5);
        assert!(!mmap.is_empty());

        let empty = MemoryMap::new(Vec::new());
        assert!(empty.is_empty());

        let fixed = MemoryMap::from_static(&SAMPLE);
        assert_eq!(fixed.len(), 5);
        assert_eq!(fixed.get_packed(), &SAMPLE);
    }

    #[test]
    fn test_get() {
        let mmap = MemoryMap::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

        assert_eq!(mmap.get(0, Some(3)).unwrap(), &[0, 1, 2]);
        assert_eq!(mmap.get(8, None).unwrap(), &[8, 9]);
        assert_eq!(mmap.get(10, None).unwrap(), &[] as &[u8]);
        assert_eq!(mmap.byte(5).unwrap(), 5);
    }

    #[test]
    fn test_bounds_checking() {
        let mmap = MemoryMap::new(vec![1, 2, 3]);

        assert_eq!(
            mmap.get(5, Some(1)),
            Err(MemoryMapError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert!(mmap.get(2, Some(5)).is_err());
        assert!(mmap.get(1, Some(usize::MAX)).is_err());
        assert!(mmap.byte(3).is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let mmap = MemoryMap::new(vec![1, 2, 3]);
        let copy = mmap.clone();
        assert!(copy.shares_storage(&mmap));

        let other = MemoryMap::new(vec![1, 2, 3]);
        assert_eq!(other, mmap);
        assert!(!other.shares_storage(&mmap));

        let fixed = MemoryMap::from_static(&SAMPLE);
        assert!(fixed.clone().shares_storage(&fixed));
    }

    #[test]
    fn test_hexdump() {
        let data = vec![
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x41, 0x42, 0x43,
        ];
        let dump = hexdump(&data, 0);
        assert!(dump.contains("00 01 02 03"));
        assert!(dump.contains("41 42 43"));
        assert!(dump.contains("|ABC|"));
        assert!(dump.starts_with("00000000  "));
        assert!(dump.contains("\n00000010  "));
    }

    #[test]
    fn test_printable_range() {
        let mmap = MemoryMap::new((0u8..32).collect());
        let dump = mmap.printable(Some(16), None);
        assert!(dump.starts_with("00000010  10 11"));
        assert_eq!(dump.lines().count(), 1);

        // Out-of-range bounds are clamped
        assert!(mmap.printable(Some(40), Some(50)).is_empty());
    }
}
