// Radio parameters a configuration table was generated for

use serde::{Deserialize, Serialize};

/// Signature stamped into every valid identifiers record
pub const IDENTIFIERS_SIG: u32 = 0x5344_5349;

/// Fixed metadata attached to a registered table
///
/// Field order is stable and matches [`Identifiers::to_array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifiers {
    /// Signature/magic value
    pub sig: u32,

    /// Crystal frequency in Hz
    pub xtal_freq: u32,

    /// Symbol rate in symbols per second
    #[serde(rename = "bps")]
    pub symb_sec: u32,

    /// Frequency deviation in Hz
    pub freq_dev: u32,

    /// Frequency-hopping step
    pub fhst: u32,

    /// Receive bandwidth in Hz
    pub rxbw: u32,
}

impl Identifiers {
    /// Keys in record order
    pub const FIELDS: [&'static str; 6] = ["sig", "xtal_freq", "bps", "freq_dev", "fhst", "rxbw"];

    /// Create a record carrying the standard signature
    pub const fn new(xtal_freq: u32, symb_sec: u32, freq_dev: u32, fhst: u32, rxbw: u32) -> Self {
        Self {
            sig: IDENTIFIERS_SIG,
            xtal_freq,
            symb_sec,
            freq_dev,
            fhst,
            rxbw,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.sig == IDENTIFIERS_SIG
    }

    /// Flat form, in record order
    pub fn to_array(&self) -> [u32; 6] {
        [
            self.sig,
            self.xtal_freq,
            self.symb_sec,
            self.freq_dev,
            self.fhst,
            self.rxbw,
        ]
    }

    /// Keyed form, in record order
    pub fn to_pairs(&self) -> Vec<(&'static str, u32)> {
        Self::FIELDS.into_iter().zip(self.to_array()).collect()
    }

    /// Look up one field by key
    pub fn get(&self, key: &str) -> Option<u32> {
        Self::FIELDS
            .iter()
            .position(|field| *field == key)
            .map(|i| self.to_array()[i])
    }
}
