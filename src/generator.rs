//! PIN generation over the registry
//!
//! The MAC is parsed once per call, before any algorithm runs, so a bad
//! address fails the whole batch without partial output.

use serde::{Deserialize, Serialize};

use crate::algorithms::{self, Algorithm, ALGORITHMS};
use crate::error::Result;
use crate::mac::MacAddress;
use crate::oui;

/// Label prefix marking vendor default PINs that do not depend on the MAC
pub const STATIC_PREFIX: &str = "Static PIN — ";

/// One generated PIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRecord {
    pub id: String,
    pub name: String,
    pub pin: String,
}

impl PinRecord {
    pub fn from_algorithm(algo: &Algorithm, mac: MacAddress) -> Self {
        let name = if algo.is_static() {
            format!("{}{}", STATIC_PREFIX, algo.name)
        } else {
            algo.name.to_string()
        };
        Self {
            id: algo.id.to_string(),
            name,
            pin: algo.pin(mac),
        }
    }
}

/// Which algorithms to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    All,
    #[default]
    Suggested,
}

fn selected(include_static: bool) -> impl Iterator<Item = &'static Algorithm> {
    ALGORITHMS
        .iter()
        .filter(move |algo| include_static || !algo.is_static())
}

fn suggested(mac: MacAddress) -> impl Iterator<Item = &'static Algorithm> {
    oui::suggest(&mac)
        .into_iter()
        .filter_map(|id| algorithms::find(id).ok())
}

/// Every registered algorithm, optionally without the static ones
pub fn get_all(mac: &str, include_static: bool) -> Result<Vec<PinRecord>> {
    let mac = MacAddress::parse(mac)?;
    tracing::debug!("Generating all pins for {} (static: {})", mac, include_static);
    Ok(selected(include_static)
        .map(|algo| PinRecord::from_algorithm(algo, mac))
        .collect())
}

/// Same order as [`get_all`], PIN strings only
pub fn get_list(mac: &str, include_static: bool) -> Result<Vec<String>> {
    let mac = MacAddress::parse(mac)?;
    Ok(selected(include_static).map(|algo| algo.pin(mac)).collect())
}

/// Only algorithms suggested by the MAC's vendor prefix
pub fn get_suggested(mac: &str) -> Result<Vec<PinRecord>> {
    let mac = MacAddress::parse(mac)?;
    tracing::debug!("Generating suggested pins for {}", mac);
    Ok(suggested(mac).map(|algo| PinRecord::from_algorithm(algo, mac)).collect())
}

/// Same order as [`get_suggested`], PIN strings only
pub fn get_suggested_list(mac: &str) -> Result<Vec<String>> {
    let mac = MacAddress::parse(mac)?;
    Ok(suggested(mac).map(|algo| algo.pin(mac)).collect())
}

/// Suggested algorithm ids for a MAC given as text
pub fn suggest(mac: &str) -> Result<Vec<&'static str>> {
    let mac = MacAddress::parse(mac)?;
    Ok(oui::suggest(&mac))
}

/// Entry point for callers holding a selection mode and static flag.
/// In suggested mode the flag drops static suggestions.
pub fn generate_pins(
    mac: &str,
    selection: Selection,
    include_static: bool,
) -> Result<Vec<PinRecord>> {
    let mac = MacAddress::parse(mac)?;
    Ok(generate_pins_for(mac, selection, include_static))
}

/// [`generate_pins`] for an already parsed MAC
pub fn generate_pins_for(
    mac: MacAddress,
    selection: Selection,
    include_static: bool,
) -> Vec<PinRecord> {
    tracing::debug!(
        "Generating {:?} pins for {} (static: {})",
        selection,
        mac,
        include_static
    );
    let to_record = |algo: &'static Algorithm| PinRecord::from_algorithm(algo, mac);
    match selection {
        Selection::All => selected(include_static).map(to_record).collect(),
        Selection::Suggested => suggested(mac)
            .filter(|algo| include_static || !algo.is_static())
            .map(to_record)
            .collect(),
    }
}
