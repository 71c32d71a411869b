//! WPS pin algorithm registry
//!
//! A fixed table of named algorithms. MAC-derived entries produce a raw
//! value that is reduced to a 7-digit body and completed with the WPS
//! check digit; static entries return a vendor default body; the single
//! empty entry yields an empty PIN.

pub mod transforms;

use std::fmt;

use serde::Serialize;

use crate::error::{Result, WpsError};
use crate::mac::MacAddress;

/// PIN bodies are 7 decimal digits
const BODY_MODULUS: u64 = 10_000_000;

/// How an algorithm produces its PIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinMode {
    Mac,
    Empty,
    Static,
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PinMode::Mac => "mac",
            PinMode::Empty => "empty",
            PinMode::Static => "static",
        };
        f.pad(name)
    }
}

#[derive(Clone, Copy)]
pub enum PinKind {
    MacDerived(fn(MacAddress) -> u64),
    Empty,
    StaticConstant(u64),
}

impl PinKind {
    pub fn mode(&self) -> PinMode {
        match self {
            PinKind::MacDerived(_) => PinMode::Mac,
            PinKind::Empty => PinMode::Empty,
            PinKind::StaticConstant(_) => PinMode::Static,
        }
    }

    /// Raw value before reduction, `None` for the empty PIN
    pub fn raw(&self, mac: MacAddress) -> Option<u64> {
        match self {
            PinKind::MacDerived(transform) => Some(transform(mac)),
            PinKind::Empty => None,
            PinKind::StaticConstant(value) => Some(*value),
        }
    }
}

impl fmt::Debug for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinKind::MacDerived(_) => f.write_str("MacDerived"),
            PinKind::Empty => f.write_str("Empty"),
            PinKind::StaticConstant(value) => f.debug_tuple("StaticConstant").field(value).finish(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: PinKind,
}

impl Algorithm {
    const fn mac(id: &'static str, name: &'static str, transform: fn(MacAddress) -> u64) -> Self {
        Self {
            id,
            name,
            kind: PinKind::MacDerived(transform),
        }
    }

    const fn fixed(id: &'static str, name: &'static str, value: u64) -> Self {
        Self {
            id,
            name,
            kind: PinKind::StaticConstant(value),
        }
    }

    pub fn mode(&self) -> PinMode {
        self.kind.mode()
    }

    pub fn is_static(&self) -> bool {
        self.mode() == PinMode::Static
    }

    /// Full PIN for an already parsed MAC
    pub fn pin(&self, mac: MacAddress) -> String {
        match self.kind.raw(mac) {
            Some(raw) => {
                let body = raw % BODY_MODULUS;
                tracing::trace!("{}: raw={} body={}", self.id, raw, body);
                format!("{:07}{}", body, checksum(body))
            }
            None => String::new(),
        }
    }
}

/// Registry in declaration order
pub static ALGORITHMS: &[Algorithm] = &[
    Algorithm::mac("pin24", "24-bit PIN", transforms::pin24),
    Algorithm::mac("pin28", "28-bit PIN", transforms::pin28),
    Algorithm::mac("pin32", "32-bit PIN", transforms::pin32),
    Algorithm::mac("pin36", "36-bit PIN", transforms::pin36),
    Algorithm::mac("pin40", "40-bit PIN", transforms::pin40),
    Algorithm::mac("pin44", "44-bit PIN", transforms::pin44),
    Algorithm::mac("pin48", "48-bit PIN", transforms::pin48),
    Algorithm::mac("pinDLink", "D-Link PIN", transforms::pin_dlink),
    Algorithm::mac("pinDLink1", "D-Link PIN +1", transforms::pin_dlink1),
    Algorithm::mac("pinASUS", "ASUS PIN", transforms::pin_asus),
    Algorithm::mac("pinAirocon", "Airocon Realtek", transforms::pin_airocon),
    Algorithm::mac("pinInvNIC", "Inv NIC to PIN", transforms::pin_inv_nic),
    Algorithm::mac("pinNIC2", "NIC * 2", transforms::pin_nic2),
    Algorithm::mac("pinNIC3", "NIC * 3", transforms::pin_nic3),
    Algorithm::mac("pinOUIaddNIC", "OUI + NIC", transforms::pin_oui_add_nic),
    Algorithm::mac("pinOUIsubNIC", "OUI − NIC", transforms::pin_oui_sub_nic),
    Algorithm::mac("pinOUIxorNIC", "OUI ^ NIC", transforms::pin_oui_xor_nic),
    Algorithm {
        id: "pinEmpty",
        name: "Empty PIN",
        kind: PinKind::Empty,
    },
    // Static vendor defaults
    Algorithm::fixed("pinCisco", "Cisco", 1_234_567),
    Algorithm::fixed("pinBrcm1", "Broadcom 1", 2_017_252),
    Algorithm::fixed("pinBrcm2", "Broadcom 2", 4_626_484),
    Algorithm::fixed("pinBrcm3", "Broadcom 3", 7_622_990),
    Algorithm::fixed("pinBrcm4", "Broadcom 4", 6_232_714),
    Algorithm::fixed("pinBrcm5", "Broadcom 5", 1_086_411),
    Algorithm::fixed("pinBrcm6", "Broadcom 6", 3_195_719),
    Algorithm::fixed("pinAirc1", "Airocon 1", 3_043_203),
    Algorithm::fixed("pinAirc2", "Airocon 2", 7_141_225),
    Algorithm::fixed("pinDSL2740R", "DSL-2740R", 6_817_554),
    Algorithm::fixed("pinRealtek1", "Realtek 1", 9_566_146),
    Algorithm::fixed("pinRealtek2", "Realtek 2", 9_571_911),
    Algorithm::fixed("pinRealtek3", "Realtek 3", 4_856_371),
    Algorithm::fixed("pinUpvel", "Upvel", 2_085_483),
    Algorithm::fixed("pinUR814AC", "UR-814AC", 4_397_768),
    Algorithm::fixed("pinUR825AC", "UR-825AC", 529_417),
    Algorithm::fixed("pinOnlime", "Onlime", 9_995_604),
    Algorithm::fixed("pinEdimax", "Edimax", 3_561_153),
    Algorithm::fixed("pinThomson", "Thomson", 6_795_814),
    Algorithm::fixed("pinHG532x", "HG532x", 3_425_928),
    Algorithm::fixed("pinH108L", "H108L", 9_422_988),
    Algorithm::fixed("pinONO", "CBN ONO", 9_575_521),
];

pub fn registry() -> &'static [Algorithm] {
    ALGORITHMS
}

pub fn find(id: &str) -> Result<&'static Algorithm> {
    ALGORITHMS
        .iter()
        .find(|algo| algo.id == id)
        .ok_or_else(|| WpsError::UnknownAlgorithm(id.to_string()))
}

/// Standard WPS check digit.
///
/// Digits are consumed from the least significant end in pairs, the first
/// of each pair weighted by 3. Bodies with fewer than seven significant
/// digits just end the loop early.
pub fn checksum(pin: u64) -> u64 {
    let mut pin = pin;
    let mut accum = 0;
    while pin != 0 {
        accum += 3 * (pin % 10);
        pin /= 10;
        accum += pin % 10;
        pin /= 10;
    }
    (10 - accum % 10) % 10
}

/// Generate the PIN of one algorithm for a MAC given as text
pub fn generate(id: &str, mac: &str) -> Result<String> {
    let algo = find(id)?;
    let mac = MacAddress::parse(mac)?;
    Ok(algo.pin(mac))
}

/// Generate the PIN of one algorithm for an already parsed MAC
pub fn generate_for(id: &str, mac: MacAddress) -> Result<String> {
    Ok(find(id)?.pin(mac))
}
