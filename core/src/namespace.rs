//! Static XML namespace tables for SOAP serialization.
//!
//! # Design
//! The carrier's legacy SOAP endpoints qualify each request field with a
//! per-service namespace. Instead of attaching namespace metadata to the
//! entities, the mapping is one flat table per request kind, keyed by the
//! wire field name and resolved here at serialization time. Entities never
//! see it; only a SOAP-capable transport collaborator does. The JSON
//! endpoints ignore namespaces entirely.

/// Identifies which request entity a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    CoordinatesNorthWest,
    CoordinatesSouthEast,
    FindNearestLocations,
    FindLocationsInArea,
    RetrieveUpdatedShipments,
}

const NS_COMMON: &str = "http://api.parcelcarrier.example/services/common/2017";
const NS_LOCATION: &str = "http://api.parcelcarrier.example/services/LocationWebservice/2017";
const NS_SHIPMENT: &str = "http://api.parcelcarrier.example/services/ShipmentWebservice/2017";

const COORDINATES_NS: &[(&str, &str)] = &[
    ("Latitude", NS_LOCATION),
    ("Longitude", NS_LOCATION),
];

const FIND_NEAREST_LOCATIONS_NS: &[(&str, &str)] = &[
    ("CountryCode", NS_COMMON),
    ("PostalCode", NS_COMMON),
    ("City", NS_COMMON),
    ("Street", NS_COMMON),
    ("HouseNumber", NS_COMMON),
    ("DeliveryDate", NS_LOCATION),
    ("OpeningTime", NS_LOCATION),
    ("DeliveryOptions", NS_LOCATION),
];

const FIND_LOCATIONS_IN_AREA_NS: &[(&str, &str)] = &[
    ("LatitudeNorth", NS_LOCATION),
    ("LongitudeWest", NS_LOCATION),
    ("LatitudeSouth", NS_LOCATION),
    ("LongitudeEast", NS_LOCATION),
    ("CountryCode", NS_COMMON),
    ("DeliveryDate", NS_LOCATION),
    ("OpeningTime", NS_LOCATION),
    ("DeliveryOptions", NS_LOCATION),
];

const RETRIEVE_UPDATED_SHIPMENTS_NS: &[(&str, &str)] = &[
    ("StartDate", NS_SHIPMENT),
    ("EndDate", NS_SHIPMENT),
];

/// All (wire field name, namespace) pairs for one request kind, in the
/// order the fields appear on the wire.
pub fn namespaces(kind: RequestKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        RequestKind::CoordinatesNorthWest | RequestKind::CoordinatesSouthEast => COORDINATES_NS,
        RequestKind::FindNearestLocations => FIND_NEAREST_LOCATIONS_NS,
        RequestKind::FindLocationsInArea => FIND_LOCATIONS_IN_AREA_NS,
        RequestKind::RetrieveUpdatedShipments => RETRIEVE_UPDATED_SHIPMENTS_NS,
    }
}

/// Namespace for one wire field of one request kind, `None` if the kind
/// has no such field.
pub fn field_namespace(kind: RequestKind, field: &str) -> Option<&'static str> {
    namespaces(kind)
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, ns)| *ns)
}
