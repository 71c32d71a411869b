//! MAC address model
//!
//! A MAC is held as its 48-bit integer value; the canonical text form
//! (`AA:BB:CC:DD:EE:FF`, uppercase, zero padded) is always rendered from it,
//! so the two representations cannot drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, WpsError};

/// Mask selecting the 48 bits of an IEEE 802 MAC address
pub const MAC_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// Mask selecting one 24-bit half (OUI or NIC part)
pub const HALF_MASK: u64 = 0xFF_FFFF;

/// Number of hex digits in a full MAC address
const HEX_DIGITS: usize = 12;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress(u64);

impl MacAddress {
    /// Parse a MAC address from text.
    ///
    /// Separators `:`, `-` and `.` are stripped and the remainder read as
    /// base-16 (case-insensitive). Exactly 12 hex digits (six bytes) must
    /// remain; partial addresses are rejected rather than zero-extended.
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .collect();

        if digits.len() != HEX_DIGITS || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            tracing::warn!("Rejected MAC address: {:?}", input);
            return Err(WpsError::InvalidAddress(input.to_string()));
        }

        let value = u64::from_str_radix(&digits, 16)
            .map_err(|_| WpsError::InvalidAddress(input.to_string()))?;
        Ok(Self(value))
    }

    /// Build from an integer. Bits above 48 are masked off.
    pub fn from_integer(value: u64) -> Self {
        Self(value & MAC_MASK)
    }

    pub fn to_integer(&self) -> u64 {
        self.0
    }

    /// Canonical colon-separated uppercase form
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Uppercase hex digits without separators, always 12 characters
    pub fn hex_digits(&self) -> String {
        format!("{:012X}", self.0)
    }

    /// Address `delta` steps away, wrapping at the 48-bit boundary
    pub fn offset(&self, delta: i64) -> Self {
        Self(self.0.wrapping_add(delta as u64) & MAC_MASK)
    }

    /// The six octets in network order
    pub fn bytes(&self) -> [u8; 6] {
        let b = self.0.to_be_bytes();
        [b[2], b[3], b[4], b[5], b[6], b[7]]
    }

    /// Top 24 bits (vendor prefix)
    pub fn oui(&self) -> u64 {
        self.0 >> 24
    }

    /// Low 24 bits (vendor-assigned device part)
    pub fn nic(&self) -> u64 {
        self.0 & HALF_MASK
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bytes();
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = WpsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u64> for MacAddress {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl From<MacAddress> for u64 {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        let expected = MacAddress::from_integer(0xAABB_CCDD_EEFF);
        assert_eq!(MacAddress::parse("AA:BB:CC:DD:EE:FF").unwrap(), expected);
        assert_eq!(MacAddress::parse("aa-bb-cc-dd-ee-ff").unwrap(), expected);
        assert_eq!(MacAddress::parse("aabb.ccdd.eeff").unwrap(), expected);
        assert_eq!(MacAddress::parse("AABBCCDDEEFF").unwrap(), expected);
        assert_eq!(MacAddress::parse("  aa:bb:cc:dd:ee:ff\n").unwrap(), expected);
    }

    #[test]
    fn test_parse_requires_six_bytes() {
        let six = ["11:22:33:44:55:66", "11-22-33-44-55-66", "1122.3344.5566", "112233445566"];
        for input in six {
            assert_eq!(MacAddress::parse(input).unwrap().to_integer(), 0x1122_3344_5566);
        }

        let five = ["11:22:33:44:55", "11-22-33-44-55", "1122.3344.55", "1122334455"];
        let seven = [
            "11:22:33:44:55:66:77",
            "11-22-33-44-55-66-77",
            "1122.3344.5566.77",
            "11223344556677",
        ];
        for input in five.into_iter().chain(seven).chain(["12:34", "1"]) {
            assert_eq!(
                MacAddress::parse(input),
                Err(WpsError::InvalidAddress(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", ":::", "GG:00:00:00:00:00", "00:11:22:33:44:55:66", "+1234", "12 34"] {
            assert_eq!(
                MacAddress::parse(input),
                Err(WpsError::InvalidAddress(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_text_is_canonical() {
        let mac = MacAddress::parse("0a-1b-2c-3d-4e-5f").unwrap();
        assert_eq!(mac.to_text(), "0A:1B:2C:3D:4E:5F");
        assert_eq!(mac.hex_digits(), "0A1B2C3D4E5F");
        assert_eq!(MacAddress::from_integer(1).to_text(), "00:00:00:00:00:01");
    }

    #[test]
    fn test_integer_is_masked() {
        let mac = MacAddress::from_integer(0x1234_AABB_CCDD_EEFF);
        assert_eq!(mac.to_integer(), 0xAABB_CCDD_EEFF);
        assert_eq!(MacAddress::from(u64::MAX).to_text(), "FF:FF:FF:FF:FF:FF");
    }

    #[test]
    fn test_offset_wraps() {
        let max = MacAddress::parse("FF:FF:FF:FF:FF:FF").unwrap();
        assert_eq!(max.offset(1).to_integer(), 0);
        assert_eq!(MacAddress::from_integer(0).offset(-1), max);
        let mac = MacAddress::parse("00:00:00:00:00:FF").unwrap();
        assert_eq!(mac.offset(1).to_text(), "00:00:00:00:01:00");
        // original is untouched
        assert_eq!(mac.to_text(), "00:00:00:00:00:FF");
    }

    #[test]
    fn test_bytes_oui_nic() {
        let mac = MacAddress::parse("28:10:7B:12:34:56").unwrap();
        assert_eq!(mac.bytes(), [0x28, 0x10, 0x7B, 0x12, 0x34, 0x56]);
        assert_eq!(mac.oui(), 0x28107B);
        assert_eq!(mac.nic(), 0x123456);
    }

    #[test]
    fn test_ordering_uses_integer() {
        let a = MacAddress::parse("00:00:00:00:00:02").unwrap();
        let b = MacAddress::parse("00:00:00:00:01:00").unwrap();
        assert!(a < b);
        assert_eq!(a, MacAddress::from_integer(2));
    }

    #[test]
    fn test_serde_as_text() {
        let mac = MacAddress::parse("de:ad:be:ef:00:01").unwrap();
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"DE:AD:BE:EF:00:01\"");
        let back: MacAddress = serde_json::from_str("\"de-ad-be-ef-00-01\"").unwrap();
        assert_eq!(back, mac);
        assert!(serde_json::from_str::<MacAddress>("\"nope\"").is_err());
    }
}
