//! Fixed named-location lookup used to skip live geolocation.
//!
//! A page address may carry `?location=<key>`; when the key matches one of
//! these entries, its coordinate is used directly and the location provider
//! is never consulted.

use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A hard-coded place name with its fixed coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedLocation {
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl NamedLocation {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// The locations the site serves directly.
pub const NAMED_LOCATIONS: &[NamedLocation] = &[
    NamedLocation {
        key: "manchester",
        name: "Manchester",
        latitude: 53.479_277_715_567_1,
        longitude: -2.244_556_963_475_58,
    },
    NamedLocation {
        key: "leeds",
        name: "Leeds",
        latitude: 53.795_490_600_383_8,
        longitude: -1.545_112_384_852_98,
    },
];

/// Look up a named location by its URL key.
///
/// Returns `None` for unknown keys — callers decide whether to fall back
/// to live geolocation or to an un-located request.
#[must_use]
pub fn named_location(key: &str) -> Option<&'static NamedLocation> {
    NAMED_LOCATIONS.iter().find(|loc| loc.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_location_finds_manchester() {
        let loc = named_location("manchester").expect("manchester should be known");
        assert_eq!(loc.name, "Manchester");
        assert!((loc.coordinate().latitude - 53.479_277).abs() < 1e-3);
        assert!((loc.coordinate().longitude - -2.244_556).abs() < 1e-3);
    }

    #[test]
    fn named_location_finds_leeds() {
        let loc = named_location("leeds").expect("leeds should be known");
        assert_eq!(loc.name, "Leeds");
    }

    #[test]
    fn named_location_unknown_key_is_none() {
        assert!(named_location("sheffield").is_none());
    }

    #[test]
    fn named_location_keys_are_exact_match() {
        // Keys come straight from the query string; no case folding.
        assert!(named_location("Manchester").is_none());
    }
}
