//! wpspin - WPS PIN generator
//!
//! Derives candidate WPS registrar PINs from a device MAC address using the
//! vendor algorithms known to seed factory-default PINs, and narrows the
//! candidates by the MAC's vendor prefix.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod mac;
pub mod oui;

pub use algorithms::{checksum, generate, generate_for, registry, Algorithm, PinKind, PinMode};
pub use error::{Result, WpsError};
pub use generator::{
    generate_pins, generate_pins_for, get_all, get_list, get_suggested, get_suggested_list, suggest,
    PinRecord, Selection,
};
pub use mac::MacAddress;
