//! Full lookup round-trips against the live mock server.
//!
//! Starts the mock server on a random port, then drives every build/parse
//! pair over real HTTP using ureq. Validates that the core's query-string
//! building and response parsing line up with an actual server.

use parcel_core::{
    ApiError, DeliveryOption, FindLocationsInAreaRequest, FindNearestLocationsRequest, HttpMethod,
    HttpRequest, HttpResponse, ParcelClient, RetrieveUpdatedShipmentsRequest,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        other => panic!("unexpected method {other:?} for a lookup"),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn lookup_round_trips() {
    let addr = start_mock_server();
    let client = ParcelClient::new(&format!("http://{addr}"));

    // Step 1: nearest locations for a Dutch address.
    let mut nearest = FindNearestLocationsRequest::new();
    nearest
        .set_country_code(Some("NL"))
        .unwrap()
        .set_postal_code(Some("2132WT"))
        .unwrap()
        .set_delivery_date(Some("03-07-2019"))
        .unwrap()
        .set_opening_time(Some("09:00:00"))
        .unwrap();
    let req = client.build_find_nearest_locations(&nearest).unwrap();
    let locations = client.parse_find_nearest_locations(execute(req)).unwrap();
    assert_eq!(locations.len(), 2);
    assert!(locations.iter().all(|l| l.address.country_code == "NL"));
    assert!(locations.iter().all(|l| l.distance.is_some()));

    // Step 2: narrowing by delivery option drops the plain pickup point.
    nearest.set_delivery_options(Some(vec![DeliveryOption::PGE]));
    let req = client.build_find_nearest_locations(&nearest).unwrap();
    let locations = client.parse_find_nearest_locations(execute(req)).unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].name, "Primera Sanders");
    assert_eq!(
        locations[0].delivery_options,
        vec![DeliveryOption::PG, DeliveryOption::PGE]
    );

    // Step 3: bounding box around Hoofddorp.
    let mut area = FindLocationsInAreaRequest::new();
    area.set_latitude_north(Some("52.4"))
        .unwrap()
        .set_longitude_west(Some(4.6))
        .unwrap()
        .set_latitude_south(Some("52.2"))
        .unwrap()
        .set_longitude_east(Some(4.8))
        .unwrap()
        .set_country_code(Some("NL"))
        .unwrap();
    let req = client.build_find_locations_in_area(&area).unwrap();
    let locations = client.parse_find_locations_in_area(execute(req)).unwrap();
    assert_eq!(locations.len(), 2);
    assert!(locations.iter().all(|l| l.distance.is_none()));
    assert!(locations.iter().all(|l| l.address.city == "Hoofddorp"));

    // Step 4: shipments updated inside a two-day period.
    let mut period = RetrieveUpdatedShipmentsRequest::new();
    period
        .set_start_date(Some("01-07-2019 00:00:00"))
        .unwrap()
        .set_end_date(Some("03-07-2019 23:59:59"))
        .unwrap();
    let req = client.build_retrieve_updated_shipments(&period).unwrap();
    let shipments = client.parse_retrieve_updated_shipments(execute(req)).unwrap();
    assert_eq!(shipments.len(), 2);
    assert!(shipments.iter().any(|s| s.barcode == "3SDEVC987021270"));

    // Step 5: a box query without coordinates is rejected server-side.
    let req = client
        .build_find_locations_in_area(&FindLocationsInAreaRequest::new())
        .unwrap();
    let err = client.parse_find_locations_in_area(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 400, .. }));

    // Step 6: an unknown endpoint surfaces as NotFound.
    let stray = ParcelClient::new(&format!("http://{addr}/nonexistent"));
    let req = stray.build_retrieve_updated_shipments(&period).unwrap();
    let err = stray.parse_retrieve_updated_shipments(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
