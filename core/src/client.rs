//! Stateless request builder and response parser for the carrier API.
//!
//! # Design
//! `ParcelClient` holds only a `base_url` and carries no mutable state
//! between calls. Each lookup is split into a `build_*` method producing an
//! `HttpRequest` and a `parse_*` method consuming an `HttpResponse`; the
//! caller executes the round-trip in between. Entities arrive here already
//! validated by their setters, so building is pure serialization: every set
//! field becomes one query parameter under the carrier's PascalCase wire
//! name, percent-encoded by the `url` crate.

use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::requests::{
    FindLocationsInAreaRequest, FindNearestLocationsRequest, RetrieveUpdatedShipmentsRequest,
};
use crate::types::{DeliveryOption, Location, UpdatedShipment};

/// Synchronous, stateless client for the carrier's location and shipment
/// lookups. Builds `HttpRequest` values and parses `HttpResponse` values
/// without touching the network.
#[derive(Debug, Clone)]
pub struct ParcelClient {
    base_url: String,
}

impl ParcelClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_find_nearest_locations(
        &self,
        request: &FindNearestLocationsRequest,
    ) -> Result<HttpRequest, ApiError> {
        let mut url = self.endpoint("/v2/locations/nearest")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(v) = request.country_code() {
                query.append_pair("CountryCode", v);
            }
            if let Some(v) = request.postal_code() {
                query.append_pair("PostalCode", v);
            }
            if let Some(v) = request.city() {
                query.append_pair("City", v);
            }
            if let Some(v) = request.street() {
                query.append_pair("Street", v);
            }
            if let Some(v) = request.house_number() {
                query.append_pair("HouseNumber", &v.to_string());
            }
            if let Some(v) = request.delivery_date() {
                query.append_pair("DeliveryDate", v);
            }
            if let Some(v) = request.opening_time() {
                query.append_pair("OpeningTime", v);
            }
            if let Some(v) = request.delivery_options() {
                query.append_pair("DeliveryOptions", &join_options(v));
            }
        }
        Ok(get_request(url))
    }

    pub fn build_find_locations_in_area(
        &self,
        request: &FindLocationsInAreaRequest,
    ) -> Result<HttpRequest, ApiError> {
        let mut url = self.endpoint("/v2/locations/area")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(v) = request.latitude_north() {
                query.append_pair("LatitudeNorth", &v.to_string());
            }
            if let Some(v) = request.longitude_west() {
                query.append_pair("LongitudeWest", &v.to_string());
            }
            if let Some(v) = request.latitude_south() {
                query.append_pair("LatitudeSouth", &v.to_string());
            }
            if let Some(v) = request.longitude_east() {
                query.append_pair("LongitudeEast", &v.to_string());
            }
            if let Some(v) = request.country_code() {
                query.append_pair("CountryCode", v);
            }
            if let Some(v) = request.delivery_date() {
                query.append_pair("DeliveryDate", v);
            }
            if let Some(v) = request.opening_time() {
                query.append_pair("OpeningTime", v);
            }
            if let Some(v) = request.delivery_options() {
                query.append_pair("DeliveryOptions", &join_options(v));
            }
        }
        Ok(get_request(url))
    }

    pub fn build_retrieve_updated_shipments(
        &self,
        request: &RetrieveUpdatedShipmentsRequest,
    ) -> Result<HttpRequest, ApiError> {
        let mut url = self.endpoint("/v2/shipments/updated")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(v) = request.start_date() {
                query.append_pair("StartDate", v);
            }
            if let Some(v) = request.end_date() {
                query.append_pair("EndDate", v);
            }
        }
        Ok(get_request(url))
    }

    pub fn parse_find_nearest_locations(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Location>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_find_locations_in_area(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Location>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_retrieve_updated_shipments(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<UpdatedShipment>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| ApiError::UrlError(e.to_string()))
    }
}

/// Wrap a finished URL in a GET request. An entity with no set fields
/// leaves an empty query serializer behind; drop the dangling `?`.
fn get_request(mut url: Url) -> HttpRequest {
    if url.query() == Some("") {
        url.set_query(None);
    }
    HttpRequest {
        method: HttpMethod::Get,
        path: url.to_string(),
        headers: Vec::new(),
        body: None,
    }
}

fn join_options(options: &[DeliveryOption]) -> String {
    options
        .iter()
        .map(DeliveryOption::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
