// Board-level defaults for the tag hardware: pin routing, fast response
// registers and interrupt sources

use crate::selector::Identifiers;

pub const ORIGIN: &str = "si446x_device_config.h";

pub const IDENTIFIERS: Identifiers =
    Identifiers::new(30_000_000, 250_000, 62_500, 250_000, 375_000);

#[rustfmt::skip]
pub const CONFIG: &[u8] = &[
    // GPIO_PIN_CFG: GPIO0 CTS, GPIO1 RX_STATE, GPIO2 TX_STATE, GPIO3 RX_DATA, NIRQ, SDO
    0x08, 0x13, 0x14, 0x02, 0x21, 0x20, 0x27, 0x0B, 0x00,
    // GLOBAL_CLK_CFG
    0x05, 0x11, 0x00, 0x01, 0x01, 0x00,
    // FRR_CTL_A..D_MODE
    0x08, 0x11, 0x02, 0x04, 0x00, 0x09, 0x04, 0x06, 0x0A,
    // INT_CTL_ENABLE..MODEM_ENABLE
    0x07, 0x11, 0x01, 0x03, 0x00, 0x07, 0x18, 0x01,
    0x00,
];
