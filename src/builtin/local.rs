// Bench overrides replayed after the WDS table in place of the device table

use crate::selector::Identifiers;

pub const ORIGIN: &str = "si446x_local_config.h";

pub const IDENTIFIERS: Identifiers =
    Identifiers::new(30_000_000, 250_000, 62_500, 250_000, 375_000);

#[rustfmt::skip]
pub const CONFIG: &[u8] = &[
    // PA_PWR_LVL: reduced output for the bench
    0x05, 0x11, 0x22, 0x01, 0x01, 0x7F,
    // GLOBAL_XO_TUNE: trimmed for this crystal
    0x05, 0x11, 0x00, 0x01, 0x00, 0x48,
    0x00,
];
