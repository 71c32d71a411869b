//! MAC-derived PIN transforms
//!
//! Each function returns the raw PIN value before the registry reduces it
//! to a 7-digit body and appends the check digit.

use crate::mac::{MacAddress, HALF_MASK};

const TEN_MILLION: u64 = 10_000_000;
const ONE_MILLION: u64 = 1_000_000;

pub fn pin24(mac: MacAddress) -> u64 {
    mac.to_integer() & 0xFF_FFFF
}

pub fn pin28(mac: MacAddress) -> u64 {
    mac.to_integer() & 0xFFF_FFFF
}

pub fn pin32(mac: MacAddress) -> u64 {
    mac.to_integer() % (1 << 32)
}

pub fn pin36(mac: MacAddress) -> u64 {
    mac.to_integer() % (1 << 36)
}

pub fn pin40(mac: MacAddress) -> u64 {
    mac.to_integer() % (1 << 40)
}

pub fn pin44(mac: MacAddress) -> u64 {
    mac.to_integer() % (1 << 44)
}

pub fn pin48(mac: MacAddress) -> u64 {
    mac.to_integer()
}

/// D-Link: NIC xor 0x55AA55, then the low nibble is spread over the upper
/// nibbles. Bodies below one million are lifted into the 7-digit range.
pub fn pin_dlink(mac: MacAddress) -> u64 {
    let mut pin = mac.nic() ^ 0x55_AA55;
    let nibble = pin & 0xF;
    pin ^= (nibble << 4) + (nibble << 8) + (nibble << 12) + (nibble << 16) + (nibble << 20);
    pin %= TEN_MILLION;
    if pin < ONE_MILLION {
        pin += (pin % 9) * ONE_MILLION + ONE_MILLION;
    }
    pin
}

/// D-Link variant computed on the next address
pub fn pin_dlink1(mac: MacAddress) -> u64 {
    pin_dlink(mac.offset(1))
}

/// ASUS: seven decimal digits, each a byte sum reduced by a varying modulus.
/// Digits are concatenated, so leading zeros drop out of the value.
pub fn pin_asus(mac: MacAddress) -> u64 {
    let b = mac.bytes().map(u64::from);
    let tail: u64 = b[1..].iter().sum();
    (0..7u64).fold(0, |pin, i| {
        let digit = (b[(i % 6) as usize] + b[5]) % (10 - (i + tail) % 7);
        pin * 10 + digit
    })
}

/// Airocon Realtek: pairwise byte sums, one per decimal place
pub fn pin_airocon(mac: MacAddress) -> u64 {
    let b = mac.bytes().map(u64::from);
    (b[0] + b[1]) % 10
        + ((b[5] + b[0]) % 10) * 10
        + ((b[4] + b[5]) % 10) * 100
        + ((b[3] + b[4]) % 10) * 1_000
        + ((b[2] + b[3]) % 10) * 10_000
        + ((b[1] + b[2]) % 10) * 100_000
        + ((b[0] + b[1]) % 10) * 1_000_000
}

pub fn pin_inv_nic(mac: MacAddress) -> u64 {
    !mac.nic() & HALF_MASK
}

pub fn pin_nic2(mac: MacAddress) -> u64 {
    mac.nic() * 2
}

pub fn pin_nic3(mac: MacAddress) -> u64 {
    mac.nic() * 3
}

pub fn pin_oui_add_nic(mac: MacAddress) -> u64 {
    (mac.oui() + mac.nic()) % TEN_MILLION
}

/// OUI - NIC. Only the borrow branch is masked to 24 bits; its intermediate
/// may be negative, in which case the mask applies to the two's complement.
pub fn pin_oui_sub_nic(mac: MacAddress) -> u64 {
    let (oui, nic) = (mac.oui(), mac.nic());
    if nic < oui {
        oui - nic
    } else {
        (oui + TEN_MILLION).wrapping_sub(nic) & HALF_MASK
    }
}

pub fn pin_oui_xor_nic(mac: MacAddress) -> u64 {
    mac.oui() ^ mac.nic()
}
