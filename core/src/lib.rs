//! Synchronous API client core for a parcel carrier's web service.
//!
//! # Overview
//! Request entities (nearest-locations lookup, locations-in-area lookup,
//! updated-shipments query) are flat records of optional fields whose
//! setters validate against the carrier's wire formats before assigning —
//! postal codes, `DD-MM-YYYY` dates, `HH:MM:SS` times, decimal-degree
//! coordinates, the NL/BE country subset. A populated entity is handed to
//! `ParcelClient`, which builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO
//! pattern): the caller executes the actual round-trip, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! # Design
//! - Setters return `Result<&mut Self, ValidationError>` for chaining; a
//!   rejected value leaves the field unchanged, and `None` always clears.
//! - Validators are pure functions in [`validate`]; date and time checks
//!   are pattern-only to match the server's own leniency.
//! - SOAP namespace tables live in [`namespace`], resolved at
//!   serialization time rather than carried by the entities.
//! - Types use owned `String` / `Vec` fields so values can cross thread
//!   boundaries freely.

pub mod client;
pub mod error;
pub mod http;
pub mod namespace;
pub mod requests;
pub mod types;
pub mod validate;

pub use client::ParcelClient;
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use namespace::RequestKind;
pub use requests::{
    CoordinatesNorthWest, CoordinatesSouthEast, FindLocationsInAreaRequest,
    FindNearestLocationsRequest, RetrieveUpdatedShipmentsRequest,
};
pub use types::{Address, DeliveryOption, Location, UpdatedShipment};
