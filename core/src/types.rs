//! Shared value types: delivery option codes and response records.
//!
//! # Design
//! Response records mirror the carrier's PascalCase JSON but are defined
//! independently from the mock-server crate; the integration tests catch
//! any schema drift between the two. Delivery options are a closed enum —
//! the carrier rejects unknown codes, so an unknown code is a validation
//! error at the client boundary rather than a silent pass-through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Service-level code attached to a location or delivery query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryOption {
    /// Pickup at a staffed retail point.
    PG,
    /// Pickup at a staffed retail point, available early morning.
    PGE,
    /// Pickup at the carrier's own depot counter.
    KEL,
    /// Parcel locker, accessible around the clock.
    PA,
    /// Home delivery on a named day.
    DO,
    /// Unstaffed pickup location.
    UL,
}

impl DeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::PG => "PG",
            DeliveryOption::PGE => "PGE",
            DeliveryOption::KEL => "KEL",
            DeliveryOption::PA => "PA",
            DeliveryOption::DO => "DO",
            DeliveryOption::UL => "UL",
        }
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PG" => Ok(DeliveryOption::PG),
            "PGE" => Ok(DeliveryOption::PGE),
            "KEL" => Ok(DeliveryOption::KEL),
            "PA" => Ok(DeliveryOption::PA),
            "DO" => Ok(DeliveryOption::DO),
            "UL" => Ok(DeliveryOption::UL),
            other => Err(ValidationError::new(
                "delivery_options",
                format!("unknown delivery option code '{other}'"),
            )),
        }
    }
}

/// Street address of a pickup location, as returned by the carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
}

/// A pickup location returned by the nearest/area lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub location_code: String,
    pub name: String,
    /// Distance from the query point in meters. Absent for area lookups,
    /// which have no single reference point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Address,
    pub delivery_options: Vec<DeliveryOption>,
}

/// A shipment whose status changed inside the queried period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatedShipment {
    pub barcode: String,
    pub status: String,
    /// Moment of the status change, `DD-MM-YYYY HH:MM:SS`.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_option_serializes_as_bare_code() {
        assert_eq!(serde_json::to_string(&DeliveryOption::PG).unwrap(), "\"PG\"");
        assert_eq!(serde_json::to_string(&DeliveryOption::PGE).unwrap(), "\"PGE\"");
    }

    #[test]
    fn delivery_option_from_str_roundtrips_every_code() {
        for opt in [
            DeliveryOption::PG,
            DeliveryOption::PGE,
            DeliveryOption::KEL,
            DeliveryOption::PA,
            DeliveryOption::DO,
            DeliveryOption::UL,
        ] {
            assert_eq!(opt.as_str().parse::<DeliveryOption>().unwrap(), opt);
        }
    }

    #[test]
    fn delivery_option_rejects_unknown_code() {
        let err = "XX".parse::<DeliveryOption>().unwrap_err();
        assert_eq!(err.field, "delivery_options");
    }

    #[test]
    fn location_deserializes_from_pascal_case_json() {
        let json = r#"{
            "LocationCode": "161503",
            "Name": "Primera Sanders",
            "Distance": 381,
            "Latitude": 52.3065, "Longitude": 4.6876,
            "Address": {
                "Street": "Markenburg", "HouseNumber": "35",
                "PostalCode": "2135DS", "City": "Hoofddorp", "CountryCode": "NL"
            },
            "DeliveryOptions": ["PG", "PGE"]
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.location_code, "161503");
        assert_eq!(location.distance, Some(381));
        assert_eq!(location.address.city, "Hoofddorp");
        assert_eq!(
            location.delivery_options,
            vec![DeliveryOption::PG, DeliveryOption::PGE]
        );
    }

    #[test]
    fn location_without_distance_deserializes() {
        let json = r#"{
            "LocationCode": "171731",
            "Name": "Bruna",
            "Latitude": 52.2891, "Longitude": 4.7531,
            "Address": {
                "Street": "Hoofdweg", "HouseNumber": "679",
                "PostalCode": "2131BC", "City": "Hoofddorp", "CountryCode": "NL"
            },
            "DeliveryOptions": ["PG"]
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert!(location.distance.is_none());
    }

    #[test]
    fn updated_shipment_roundtrips_through_json() {
        let shipment = UpdatedShipment {
            barcode: "3SDEVC987021270".to_string(),
            status: "Delivered".to_string(),
            timestamp: "03-07-2019 14:22:10".to_string(),
        };
        let json = serde_json::to_string(&shipment).unwrap();
        let back: UpdatedShipment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shipment);
    }
}
