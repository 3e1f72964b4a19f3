// Flat function surface for scripting bindings
//
// Every function takes an optional table name; `None` means the current
// default. Argument parsing and type conversion stay in the binding layer.

use crate::builtin;
use crate::selector::{ConfigSelector, DefaultChoice, Identifiers};
use crate::table::ConfigResult;

lazy_static::lazy_static! {
    static ref SELECTOR: ConfigSelector = builtin::default_selector();
}

/// Process-wide selector holding the built-in tables
pub fn global_selector() -> &'static ConfigSelector {
    &SELECTOR
}

/// Payload of the entry whose length byte is at @offset
///
/// Walk a table by starting at 0 and adding `len + 1` after each call,
/// stopping at the first empty result.
pub fn get_config(name: Option<&str>, offset: usize) -> ConfigResult<Vec<u8>> {
    Ok(SELECTOR.select(name)?.entry_at(offset)?.to_vec())
}

/// Single byte of the encoded table
pub fn get_config_byte(name: Option<&str>, pos: usize) -> ConfigResult<u8> {
    SELECTOR.select(name)?.byte_at(pos)
}

/// Number of entries in the table
pub fn get_config_count(name: Option<&str>) -> ConfigResult<usize> {
    SELECTOR.select(name)?.count()
}

/// Bytes used by entries, terminator excluded
pub fn get_config_size(name: Option<&str>) -> ConfigResult<usize> {
    SELECTOR.select(name)?.total_size()
}

/// Every entry payload, in order
pub fn get_raw_config(name: Option<&str>) -> ConfigResult<Vec<Vec<u8>>> {
    SELECTOR
        .select(name)?
        .entries()
        .map(|entry| entry.map(|e| e.payload.to_vec()))
        .collect()
}

/// Entry payloads of several tables, concatenated in the order given
pub fn get_config_sequence(names: &[&str]) -> ConfigResult<Vec<Vec<u8>>> {
    Ok(SELECTOR
        .sequence(names)?
        .into_iter()
        .map(<[u8]>::to_vec)
        .collect())
}

/// The full command sequence a deployed device receives at boot
pub fn get_boot_config() -> ConfigResult<Vec<Vec<u8>>> {
    get_config_sequence(&builtin::BOOT_SEQUENCE)
}

pub fn get_ids(name: Option<&str>) -> ConfigResult<Identifiers> {
    SELECTOR.identifiers(name).copied()
}

/// Origin label of the table
pub fn get_name(name: Option<&str>) -> ConfigResult<String> {
    SELECTOR.name(name).map(str::to_string)
}

/// Change the default table and return the previous level
///
/// A negative @level only reports the current level.
pub fn default_config(level: i64) -> ConfigResult<usize> {
    SELECTOR.set_default(DefaultChoice::Level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests share the global selector, so they name their table instead of
    // relying on whichever default another test left behind.

    #[test]
    fn test_walk_by_offset() {
        let mut offset = 0;
        let mut strings = Vec::new();
        loop {
            let s = get_config(Some("wds"), offset).unwrap();
            if s.is_empty() {
                break;
            }
            offset += s.len() + 1;
            strings.push(s);
        }

        assert_eq!(strings.len(), get_config_count(Some("wds")).unwrap());
        assert_eq!(offset, get_config_size(Some("wds")).unwrap());
        assert_eq!(strings, get_raw_config(Some("wds")).unwrap());
    }

    #[test]
    fn test_boot_config_replays_wds_then_device() {
        let mut expected = get_raw_config(Some("wds")).unwrap();
        expected.extend(get_raw_config(Some("device")).unwrap());
        assert_eq!(get_boot_config().unwrap(), expected);

        let bench = get_config_sequence(&builtin::BENCH_SEQUENCE).unwrap();
        assert_eq!(bench.last().unwrap(), &vec![0x11, 0x00, 0x01, 0x00, 0x48]);
        assert!(get_config_sequence(&["wds", "missing"])
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_get_config_byte() {
        assert_eq!(get_config_byte(Some("local"), 0).unwrap(), 0x05);
        assert_eq!(get_config_byte(Some("local"), 12).unwrap(), 0x00);
        assert!(get_config_byte(Some("local"), 13).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_unknown_name() {
        assert!(get_config(Some("missing"), 0).unwrap_err().is_not_found());
        assert!(get_ids(Some("missing")).unwrap_err().is_not_found());
        assert!(get_name(Some("missing")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_ids_and_name() {
        let ids = get_ids(Some("wds")).unwrap();
        assert_eq!(ids.get("bps"), Some(250_000));
        assert_eq!(get_name(Some("device")).unwrap(), builtin::device::ORIGIN);
    }

    #[test]
    fn test_default_config() {
        let current = default_config(-1).unwrap();
        assert!(current < builtin::BUILTIN_NAMES.len());

        let previous = default_config(current as i64).unwrap();
        assert_eq!(previous, current);
        assert!(default_config(99).unwrap_err().is_out_of_range());
        assert!(get_config(None, 0).is_ok());
    }
}
