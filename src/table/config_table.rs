// Length-prefixed configuration-string table
//
// Layout: [len][payload; len] [len][payload; len] ... 0x00

use super::error::{ConfigError, ConfigResult, MalformedReason, RangeFault};
use super::limits::{TableLimits, DEFAULT_MAX_ENTRY_LEN, DEFAULT_MAX_SCAN};
use crate::memmap::MemoryMap;
use std::fmt;
use std::iter::FusedIterator;

/// One length-prefixed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Ordinal position in the table
    pub index: usize,
    /// Offset of the length byte
    pub offset: usize,
    pub payload: &'a [u8],
}

impl<'a> Entry<'a> {
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Bytes this record occupies, length byte included
    pub fn record_len(&self) -> usize {
        1 + self.payload.len()
    }

    /// Offset of the record that follows this one
    pub fn next_offset(&self) -> usize {
        self.offset + self.record_len()
    }

    /// Payload as space-separated hex
    pub fn hex(&self) -> String {
        self.payload
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<3} @{:04}  len {:2}  {}",
            self.index,
            self.offset,
            self.len(),
            self.hex()
        )
    }
}

/// Outcome of walking a table from offset 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Entries seen before the scan stopped
    pub count: usize,
    /// Offset where the scan stopped; the terminator's offset on success
    pub end: usize,
    /// Set when the scan stopped without finding a terminator
    pub fault: Option<MalformedReason>,
}

impl ScanReport {
    pub fn is_well_formed(&self) -> bool {
        self.fault.is_none()
    }

    fn check(self) -> ConfigResult<Self> {
        match self.fault {
            Some(reason) => Err(reason.into()),
            None => Ok(self),
        }
    }
}

enum Step<'a> {
    Entry(Entry<'a>),
    End,
    Fault(MalformedReason),
}

/// Read-only view over an encoded configuration table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTable {
    map: MemoryMap,
    limits: TableLimits,
}

impl ConfigTable {
    /// Wrap a built-in table using the default limits
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            map: MemoryMap::from_static(data),
            limits: TableLimits {
                max_scan: DEFAULT_MAX_SCAN,
                max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            },
        }
    }

    /// Create a table over @map without checking its contents
    pub fn new(map: impl Into<MemoryMap>, limits: TableLimits) -> Self {
        Self {
            map: map.into(),
            limits,
        }
    }

    /// Create a table over @map, rejecting it unless a full scan succeeds
    pub fn validated(map: impl Into<MemoryMap>, limits: TableLimits) -> ConfigResult<Self> {
        let table = Self::new(map, limits);
        table.scan().check()?;
        Ok(table)
    }

    /// Same bytes, different limits
    pub fn with_limits(mut self, limits: TableLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &TableLimits {
        &self.limits
    }

    pub fn map(&self) -> &MemoryMap {
        &self.map
    }

    /// Size of the backing buffer, terminator and any trailing bytes included
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Decode the record starting at @offset
    fn step(&self, offset: usize, index: usize) -> Step<'_> {
        let ceiling = self.limits.max_scan;
        if offset >= ceiling {
            return Step::Fault(MalformedReason::Unterminated { ceiling });
        }

        let data = self.map.get_packed();
        let length = match data.get(offset) {
            Some(&length) => length as usize,
            None => {
                return Step::Fault(MalformedReason::Truncated {
                    offset,
                    len: data.len(),
                })
            }
        };

        if length == 0 {
            return Step::End;
        }
        if length > self.limits.max_entry_len {
            return Step::Fault(MalformedReason::EntryTooLong {
                offset,
                length,
                max: self.limits.max_entry_len,
            });
        }

        let end = offset + 1 + length;
        if end > data.len() {
            return Step::Fault(MalformedReason::Truncated {
                offset,
                len: data.len(),
            });
        }

        Step::Entry(Entry {
            index,
            offset,
            payload: &data[offset + 1..end],
        })
    }

    /// Walk the table to its terminator or the first fault
    pub fn scan(&self) -> ScanReport {
        let mut offset = 0;
        let mut count = 0;

        loop {
            match self.step(offset, count) {
                Step::Entry(entry) => {
                    offset = entry.next_offset();
                    count += 1;
                }
                Step::End => {
                    return ScanReport {
                        count,
                        end: offset,
                        fault: None,
                    }
                }
                Step::Fault(reason) => {
                    tracing::debug!("Table scan stopped at offset {}: {}", offset, reason);
                    return ScanReport {
                        count,
                        end: offset.min(self.limits.max_scan),
                        fault: Some(reason),
                    };
                }
            }
        }
    }

    /// Number of entries before the terminator
    pub fn count(&self) -> ConfigResult<usize> {
        Ok(self.scan().check()?.count)
    }

    /// Offset of the terminator, i.e. the bytes used by real entries
    pub fn total_size(&self) -> ConfigResult<usize> {
        Ok(self.scan().check()?.end)
    }

    /// Lazily iterate over entries from offset 0
    ///
    /// A malformed table yields one error after its last good entry.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            table: self,
            offset: 0,
            index: 0,
            done: false,
        }
    }

    /// Entry-start offsets, in order
    pub fn offsets(&self) -> impl Iterator<Item = ConfigResult<usize>> + '_ {
        self.entries().map(|entry| entry.map(|e| e.offset))
    }

    /// Payload of the record whose length byte sits at @offset
    ///
    /// @offset should be an entry boundary. Any other offset decodes garbage
    /// but is still bounds-checked. A zero length byte gives an empty payload.
    pub fn entry_at(&self, offset: usize) -> ConfigResult<&[u8]> {
        let len = self.map.len();
        let length = self
            .map
            .byte(offset)
            .map_err(|_| RangeFault::Offset { offset, len })? as usize;

        if length > self.limits.max_entry_len {
            return Err(RangeFault::EntryTooLong {
                offset,
                length,
                max: self.limits.max_entry_len,
            }
            .into());
        }

        self.map.get(offset + 1, Some(length)).map_err(|_| {
            RangeFault::Overrun {
                offset,
                end: offset + 1 + length,
                len,
            }
            .into()
        })
    }

    /// Entry by ordinal position
    pub fn entry(&self, index: usize) -> ConfigResult<Entry<'_>> {
        let mut count = 0;
        for entry in self.entries() {
            let entry = entry?;
            if entry.index == index {
                return Ok(entry);
            }
            count += 1;
        }
        Err(RangeFault::Index { index, count }.into())
    }

    /// Single raw byte of the backing buffer
    pub fn byte_at(&self, pos: usize) -> ConfigResult<u8> {
        self.map.byte(pos).map_err(|_| {
            ConfigError::OutOfRange(RangeFault::Offset {
                offset: pos,
                len: self.map.len(),
            })
        })
    }

    /// Every entry record as one blob, terminator excluded
    pub fn raw_bytes(&self) -> ConfigResult<&[u8]> {
        let total = self.total_size()?;
        self.map.get(0, Some(total)).map_err(|_| {
            RangeFault::Overrun {
                offset: 0,
                end: total,
                len: self.map.len(),
            }
            .into()
        })
    }

    /// Hex dump of the entry region, or the whole buffer when malformed
    pub fn printable(&self) -> String {
        let report = self.scan();
        let end = if report.is_well_formed() {
            report.end + 1
        } else {
            self.map.len()
        };
        self.map.printable(None, Some(end))
    }
}

/// Iterator returned by [`ConfigTable::entries`]
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    table: &'a ConfigTable,
    offset: usize,
    index: usize,
    done: bool,
}

impl<'a> Iterator for Entries<'a> {
    type Item = ConfigResult<Entry<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.table.step(self.offset, self.index) {
            Step::Entry(entry) => {
                self.offset = entry.next_offset();
                self.index += 1;
                Some(Ok(entry))
            }
            Step::End => {
                self.done = true;
                None
            }
            Step::Fault(reason) => {
                self.done = true;
                tracing::debug!("Entry iteration stopped at offset {}: {}", self.offset, reason);
                Some(Err(reason.into()))
            }
        }
    }
}

impl FusedIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(bytes: &[u8]) -> ConfigTable {
        ConfigTable::new(bytes.to_vec(), TableLimits::default())
    }

    fn payloads(table: &ConfigTable) -> Vec<Vec<u8>> {
        table
            .entries()
            .map(|e| e.unwrap().payload.to_vec())
            .collect()
    }

    #[test]
    fn test_empty_table() {
        let t = table(&[0x00]);
        assert_eq!(t.count().unwrap(), 0);
        assert_eq!(t.total_size().unwrap(), 0);
        assert_eq!(t.entries().count(), 0);
        assert_eq!(t.raw_bytes().unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_single_entry() {
        let t = table(&[3, 0xAA, 0xBB, 0xCC, 0x00]);
        assert_eq!(t.count().unwrap(), 1);
        assert_eq!(t.total_size().unwrap(), 4);
        assert_eq!(t.entry_at(0).unwrap(), &[0xAA, 0xBB, 0xCC]);
        assert_eq!(t.raw_bytes().unwrap(), &[3, 0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_two_entries() {
        let t = table(&[2, 0x01, 0x02, 1, 0xFF, 0x00]);
        assert_eq!(t.count().unwrap(), 2);
        assert_eq!(t.total_size().unwrap(), 5);
        assert_eq!(payloads(&t), vec![vec![0x01, 0x02], vec![0xFF]]);

        let entries: Vec<_> = t.entries().map(|e| e.unwrap()).collect();
        assert_eq!(entries[0].offset, 0);
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[1].offset, 3);
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].next_offset(), 5);
    }

    #[test]
    fn test_entries_agree_with_count_and_size() {
        let t = table(&[
            1, 0x10, 4, 0x11, 0x00, 0x01, 0x52, 16, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13,
            14, 15, 2, 0x13, 0x14, 0x00,
        ]);
        let entries: Vec<_> = t.entries().collect::<ConfigResult<_>>().unwrap();

        assert_eq!(entries.len(), t.count().unwrap());
        let summed: usize = entries.iter().map(|e| e.record_len()).sum();
        assert_eq!(summed, t.total_size().unwrap());

        for entry in &entries {
            assert_eq!(t.entry_at(entry.offset).unwrap(), entry.payload);
        }
    }

    #[test]
    fn test_entries_restartable() {
        let t = table(&[2, 0x01, 0x02, 1, 0xFF, 0x00]);
        let first: Vec<_> = t.entries().collect();
        let second: Vec<_> = t.entries().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let t = table(&[1, 0x42, 0x00, 0xDE, 0xAD]);
        assert_eq!(t.count().unwrap(), 1);
        assert_eq!(t.total_size().unwrap(), 2);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn test_unterminated_at_ceiling() {
        // 600 two-byte records and no terminator
        let bytes: Vec<u8> = std::iter::repeat([1u8, 0xFF]).take(600).flatten().collect();
        let t = table(&bytes);

        let err = t.count().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Malformed(MalformedReason::Unterminated { ceiling: 1000 })
        );
        assert!(t.total_size().unwrap_err().is_malformed());

        let report = t.scan();
        assert_eq!(report.count, 500);
        assert_eq!(report.end, 1000);
        assert!(!report.is_well_formed());
    }

    #[test]
    fn test_small_ceiling() {
        let limits = TableLimits::default().with_max_scan(4);
        let t = ConfigTable::new(vec![1, 0x01, 1, 0x02, 0x00], limits);
        assert!(t.count().unwrap_err().is_malformed());

        let t = t.with_limits(TableLimits::default().with_max_scan(5));
        assert_eq!(t.count().unwrap(), 2);
    }

    #[test]
    fn test_missing_terminator_in_short_buffer() {
        let t = table(&[2, 0x01, 0x02]);
        assert_eq!(
            t.count(),
            Err(ConfigError::Malformed(MalformedReason::Truncated {
                offset: 3,
                len: 3
            }))
        );
    }

    #[test]
    fn test_entry_overruns_buffer() {
        let t = table(&[5, 0x01, 0x02]);
        assert!(t.total_size().unwrap_err().is_malformed());
        assert!(t.entry_at(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_oversized_entry_is_malformed() {
        let mut bytes = vec![17u8];
        bytes.extend(std::iter::repeat(0xEE).take(17));
        bytes.push(0);
        let t = table(&bytes);

        assert_eq!(
            t.count(),
            Err(ConfigError::Malformed(MalformedReason::EntryTooLong {
                offset: 0,
                length: 17,
                max: 16
            }))
        );
        assert_eq!(
            t.entry_at(0),
            Err(ConfigError::OutOfRange(RangeFault::EntryTooLong {
                offset: 0,
                length: 17,
                max: 16
            }))
        );

        // The same bytes pass under a wider entry limit
        let t = t.with_limits(TableLimits::default().with_max_entry_len(17));
        assert_eq!(t.count().unwrap(), 1);
        assert_eq!(t.entry_at(0).unwrap().len(), 17);
    }

    #[test]
    fn test_entries_yield_error_then_stop() {
        let t = table(&[1, 0xAA, 20, 0x00]);
        let mut it = t.entries();
        assert_eq!(it.next().unwrap().unwrap().payload, &[0xAA]);
        assert!(it.next().unwrap().unwrap_err().is_malformed());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_entry_at_out_of_range() {
        let t = table(&[1, 0xAA, 0x00]);
        assert_eq!(
            t.entry_at(3),
            Err(ConfigError::OutOfRange(RangeFault::Offset { offset: 3, len: 3 }))
        );
        assert_eq!(t.entry_at(2).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_entry_at_arbitrary_offset_stays_in_bounds() {
        let t = table(&[3, 0x01, 0x02, 0x09, 0x00]);
        // 0x01 decodes as a one-byte entry
        assert_eq!(t.entry_at(1).unwrap(), &[0x02]);
        // 0x09 would read past the end
        assert!(t.entry_at(3).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_entry_by_index() {
        let t = table(&[2, 0x01, 0x02, 1, 0xFF, 0x00]);
        assert_eq!(t.entry(1).unwrap().payload, &[0xFF]);
        assert_eq!(
            t.entry(2),
            Err(ConfigError::OutOfRange(RangeFault::Index { index: 2, count: 2 }))
        );
    }

    #[test]
    fn test_offsets_and_bytes() {
        let t = table(&[2, 0x01, 0x02, 1, 0xFF, 0x00]);
        let offsets: Vec<usize> = t.offsets().collect::<ConfigResult<_>>().unwrap();
        assert_eq!(offsets, vec![0, 3]);

        assert_eq!(t.byte_at(4).unwrap(), 0xFF);
        assert!(t.byte_at(6).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_validated() {
        assert!(ConfigTable::validated(vec![1, 0x01, 0x00], TableLimits::default()).is_ok());
        assert!(ConfigTable::validated(vec![1, 0x01], TableLimits::default())
            .unwrap_err()
            .is_malformed());
    }

    #[test]
    fn test_entry_display() {
        let t = table(&[2, 0x01, 0xAB, 0x00]);
        let entry = t.entry(0).unwrap();
        assert_eq!(entry.hex(), "01 ab");
        assert!(entry.to_string().contains("len  2"));
    }

    #[test]
    fn test_printable_covers_terminator() {
        let t = table(&[1, 0x41, 0x00, 0x99]);
        let dump = t.printable();
        assert!(dump.contains("01 41 00"));
        assert!(!dump.contains("99"));
    }
}
