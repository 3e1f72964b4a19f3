// Configuration exported from the Silicon Labs WDS project
// 30 MHz crystal, 2GFSK, 250 ksps

use crate::selector::Identifiers;

pub const ORIGIN: &str = "radio_config_Si4463_30M_250k.h";

pub const IDENTIFIERS: Identifiers =
    Identifiers::new(30_000_000, 250_000, 62_500, 250_000, 375_000);

#[rustfmt::skip]
pub const CONFIG: &[u8] = &[
    // POWER_UP: boot main app, 30 MHz XTAL
    0x07, 0x02, 0x01, 0x00, 0x01, 0xC9, 0xC3, 0x80,
    // GPIO_PIN_CFG: leave pins unchanged
    0x08, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // GLOBAL_XO_TUNE
    0x05, 0x11, 0x00, 0x01, 0x00, 0x52,
    // GLOBAL_CONFIG
    0x05, 0x11, 0x00, 0x01, 0x03, 0x60,
    // INT_CTL_ENABLE
    0x05, 0x11, 0x01, 0x01, 0x00, 0x00,
    // PREAMBLE_TX_LENGTH..PREAMBLE_PATTERN
    0x0D, 0x11, 0x10, 0x09, 0x00, 0x08, 0x14, 0x00, 0x0F, 0x31, 0x00, 0x00, 0x00, 0x00,
    // SYNC_CONFIG..SYNC_BITS
    0x09, 0x11, 0x11, 0x05, 0x00, 0x01, 0xB4, 0x2B, 0x00, 0x00,
    // PKT_CONFIG1
    0x05, 0x11, 0x12, 0x01, 0x06, 0x80,
    // MODEM_MOD_TYPE..MODEM_FREQ_DEV
    0x10, 0x11, 0x20, 0x0C, 0x00, 0x03, 0x00, 0x07, 0x26, 0x25, 0xA0, 0x01, 0xC9, 0xC3, 0x80, 0x00, 0x05,
    // MODEM_FREQ_DEV low byte
    0x05, 0x11, 0x20, 0x01, 0x0C, 0x76,
    // MODEM_MDM_CTRL..MODEM_BCR_NCO_OFFSET
    0x0E, 0x11, 0x20, 0x0A, 0x18, 0x01, 0x80, 0x08, 0x03, 0x80, 0x00, 0x30, 0x10, 0x00, 0xE8,
    // MODEM_CHFLT_RX1_CHFLT_COE13..COE2
    0x10, 0x11, 0x21, 0x0C, 0x00, 0xCC, 0xA1, 0x30, 0xA0, 0x21, 0xD1, 0xB9, 0xC9, 0xEA, 0x05, 0x12, 0x11,
    // PA_MODE..PA_TC
    0x08, 0x11, 0x22, 0x04, 0x00, 0x08, 0x7F, 0x00, 0x1D,
    // FREQ_CONTROL_INTE..FREQ_CONTROL_VCOCNT_RX_ADJ
    0x0C, 0x11, 0x40, 0x08, 0x00, 0x38, 0x0D, 0xDD, 0xDD, 0x44, 0x44, 0x20, 0xFE,
    0x00,
];
