//! In-process mock of the carrier's location and shipment lookups.
//!
//! Serves canned fixtures behind the same three GET endpoints the real API
//! exposes, filtered by the query parameters. Types are defined
//! independently from the client core; the core's integration tests catch
//! any schema drift between the two crates.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub location_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Address,
    pub delivery_options: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatedShipment {
    pub barcode: String,
    pub status: String,
    pub timestamp: String,
}

pub struct Fixtures {
    pub locations: Vec<Location>,
    pub shipments: Vec<UpdatedShipment>,
}

fn location(
    code: &str,
    name: &str,
    distance: i64,
    latitude: f64,
    longitude: f64,
    street: &str,
    house_number: &str,
    postal_code: &str,
    city: &str,
    country_code: &str,
    delivery_options: &[&str],
) -> Location {
    Location {
        location_code: code.to_string(),
        name: name.to_string(),
        distance: Some(distance),
        latitude,
        longitude,
        address: Address {
            street: street.to_string(),
            house_number: house_number.to_string(),
            postal_code: postal_code.to_string(),
            city: city.to_string(),
            country_code: country_code.to_string(),
        },
        delivery_options: delivery_options.iter().map(|s| s.to_string()).collect(),
    }
}

fn shipment(barcode: &str, status: &str, timestamp: &str) -> UpdatedShipment {
    UpdatedShipment {
        barcode: barcode.to_string(),
        status: status.to_string(),
        timestamp: timestamp.to_string(),
    }
}

pub fn fixtures() -> Fixtures {
    Fixtures {
        locations: vec![
            location(
                "161503", "Primera Sanders", 381, 52.3065, 4.6876, "Markenburg", "35", "2135DS",
                "Hoofddorp", "NL", &["PG", "PGE"],
            ),
            location(
                "171731", "Bruna Hoofddorp", 1203, 52.3021, 4.6889, "Hoofdweg", "679", "2131BC",
                "Hoofddorp", "NL", &["PG"],
            ),
            location(
                "110867", "Press Shop Brussel", 540, 50.8467, 4.3525, "Nieuwstraat", "42", "1000",
                "Brussel", "BE", &["PG", "PA"],
            ),
        ],
        shipments: vec![
            shipment("3SDEVC201611210", "Sorting", "02-07-2019 08:15:00"),
            shipment("3SDEVC987021270", "Delivered", "03-07-2019 14:22:10"),
            shipment("3SDEVC817125312", "En route", "05-07-2019 11:43:37"),
        ],
    }
}

type Shared = Arc<Fixtures>;

pub fn app() -> Router {
    let state: Shared = Arc::new(fixtures());
    Router::new()
        .route("/v2/locations/nearest", get(nearest_locations))
        .route("/v2/locations/area", get(locations_in_area))
        .route("/v2/shipments/updated", get(updated_shipments))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NearestParams {
    country_code: Option<String>,
    delivery_options: Option<String>,
}

async fn nearest_locations(
    State(state): State<Shared>,
    Query(params): Query<NearestParams>,
) -> Result<Json<Vec<Location>>, (StatusCode, String)> {
    let country = params
        .country_code
        .ok_or((StatusCode::BAD_REQUEST, "missing CountryCode".to_string()))?;
    let wanted: Option<Vec<&str>> = params
        .delivery_options
        .as_deref()
        .map(|s| s.split(',').collect());

    let matches = state
        .locations
        .iter()
        .filter(|loc| loc.address.country_code == country)
        .filter(|loc| match &wanted {
            Some(codes) => codes
                .iter()
                .any(|code| loc.delivery_options.iter().any(|o| o == code)),
            None => true,
        })
        .cloned()
        .collect();
    Ok(Json(matches))
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AreaParams {
    latitude_north: Option<f64>,
    longitude_west: Option<f64>,
    latitude_south: Option<f64>,
    longitude_east: Option<f64>,
    country_code: Option<String>,
}

async fn locations_in_area(
    State(state): State<Shared>,
    Query(params): Query<AreaParams>,
) -> Result<Json<Vec<Location>>, (StatusCode, String)> {
    let (Some(north), Some(west), Some(south), Some(east)) = (
        params.latitude_north,
        params.longitude_west,
        params.latitude_south,
        params.longitude_east,
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            "missing bounding box coordinate".to_string(),
        ));
    };

    let matches = state
        .locations
        .iter()
        .filter(|loc| loc.latitude >= south && loc.latitude <= north)
        .filter(|loc| loc.longitude >= west && loc.longitude <= east)
        .filter(|loc| match &params.country_code {
            Some(cc) => &loc.address.country_code == cc,
            None => true,
        })
        .cloned()
        .map(|mut loc| {
            // Area lookups have no reference point to measure from.
            loc.distance = None;
            loc
        })
        .collect();
    Ok(Json(matches))
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PeriodParams {
    start_date: Option<String>,
    end_date: Option<String>,
}

async fn updated_shipments(
    State(state): State<Shared>,
    Query(params): Query<PeriodParams>,
) -> Result<Json<Vec<UpdatedShipment>>, (StatusCode, String)> {
    let start = params
        .start_date
        .as_deref()
        .and_then(sort_key)
        .ok_or((StatusCode::BAD_REQUEST, "invalid StartDate".to_string()))?;
    let end = params
        .end_date
        .as_deref()
        .and_then(sort_key)
        .ok_or((StatusCode::BAD_REQUEST, "invalid EndDate".to_string()))?;

    let matches = state
        .shipments
        .iter()
        .filter(|s| {
            sort_key(&s.timestamp)
                .map(|key| start <= key && key <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    Ok(Json(matches))
}

/// Turn `DD-MM-YYYY HH:MM:SS` into a lexicographically comparable tuple.
/// `DD-MM-YYYY` strings do not sort chronologically as-is.
fn sort_key(s: &str) -> Option<(u16, u8, u8, u8, u8, u8)> {
    let (date, time) = s.split_once(' ')?;
    let mut d = date.splitn(3, '-');
    let day: u8 = d.next()?.parse().ok()?;
    let month: u8 = d.next()?.parse().ok()?;
    let year: u16 = d.next()?.parse().ok()?;
    let mut t = time.splitn(3, ':');
    let hour: u8 = t.next()?.parse().ok()?;
    let minute: u8 = t.next()?.parse().ok()?;
    let second: u8 = t.next()?.parse().ok()?;
    Some((year, month, day, hour, minute, second))
}
