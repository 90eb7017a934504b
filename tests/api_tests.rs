use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, SecondsFormat, Timelike, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleetlink_backend::config::environment::EnvironmentConfig;
use fleetlink_backend::routes::create_api_router;
use fleetlink_backend::state::AppState;

// Función helper para crear la app de test
fn create_test_app() -> axum::Router {
    let state = AppState::new(EnvironmentConfig::default());
    create_api_router().with_state(state)
}

async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    read_response(app, request).await
}

async fn send_get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    read_response(app, request).await
}

async fn read_response(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

// Redondeado al segundo para que el query string lo represente sin pérdida
fn future_start() -> DateTime<Utc> {
    (Utc::now() + Duration::hours(2)).with_nanosecond(0).unwrap()
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

async fn register_vehicle(app: &axum::Router, name: &str, capacity_kg: i64, tyres: i64) -> Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/vehicles",
        json!({ "name": name, "capacityKg": capacity_kg, "tyres": tyres }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["vehicle"].clone()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send_get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "fleetlink-backend");
}

#[tokio::test]
async fn test_add_vehicle_returns_created_vehicle() {
    let app = create_test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/vehicles",
        json!({ "name": "Tata Ace", "capacityKg": 1000, "tyres": 4 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vehículo registrado exitosamente");
    assert_eq!(body["vehicle"]["name"], "Tata Ace");
    assert_eq!(body["vehicle"]["capacityKg"], 1000);
    assert_eq!(body["vehicle"]["tyres"], 4);
    assert!(body["vehicle"]["id"].is_string());
    assert!(body["vehicle"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_add_vehicle_trims_name() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "  Eicher Pro  ", 2000, 6).await;
    assert_eq!(vehicle["name"], "Eicher Pro");
}

#[tokio::test]
async fn test_add_vehicle_empty_name_is_rejected() {
    let app = create_test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/vehicles",
        json!({ "name": "   ", "capacityKg": 1000, "tyres": 4 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    // el detalle nombra el campo ofensivo
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_add_vehicle_out_of_range_fields_are_rejected() {
    let app = create_test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/vehicles",
        json!({ "name": "Mini", "capacityKg": 0, "tyres": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["capacityKg"].is_array());

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/vehicles",
        json!({ "name": "Mono", "capacityKg": 1000, "tyres": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["tyres"].is_array());

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/vehicles",
        json!({ "name": "Gigante", "capacityKg": 50001, "tyres": 18 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["capacityKg"].is_array());
}

#[tokio::test]
async fn test_list_vehicles_in_registration_order() {
    let app = create_test_app();
    register_vehicle(&app, "Alpha", 500, 4).await;
    register_vehicle(&app, "Beta", 1500, 6).await;

    let (status, body) = send_get(&app, "/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);

    let vehicles = body["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0]["name"], "Alpha");
    assert_eq!(vehicles[1]["name"], "Beta");
}

#[tokio::test]
async fn test_get_vehicle_by_id_and_unknown_vehicle() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "Alpha", 500, 4).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, body) = send_get(&app, &format!("/api/vehicles/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alpha");

    let (status, body) = send_get(
        &app,
        "/api/vehicles/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "VEHICLE_NOT_FOUND");
}

#[tokio::test]
async fn test_search_returns_matching_vehicles_with_annotations() {
    let app = create_test_app();
    register_vehicle(&app, "Pequeño", 300, 4).await;
    register_vehicle(&app, "Grande", 2000, 6).await;

    let start = future_start();
    let uri = format!(
        "/api/vehicles/available?capacityRequired=500&fromPincode=110001&toPincode=110002&startTime={}",
        rfc3339(start)
    );
    let (status, body) = send_get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    let available = body["availableVehicles"].as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0]["name"], "Grande");
    assert_eq!(available[0]["estimatedRideDurationHours"], 1.0);
    assert_eq!(available[0]["availableForRoute"]["from"], "110001");
    assert_eq!(available[0]["availableForRoute"]["to"], "110002");

    // la ventana calculada cubre exactamente la duración estimada
    let window_start: DateTime<Utc> = available[0]["bookingWindow"]["startTime"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let window_end: DateTime<Utc> = available[0]["bookingWindow"]["endTime"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(window_start, start);
    assert_eq!(window_end, start + Duration::hours(1));

    // los criterios viajan ecoados en la respuesta
    assert_eq!(body["searchCriteria"]["capacityRequired"], 500);
    assert_eq!(body["searchCriteria"]["fromPincode"], "110001");
    assert_eq!(body["searchCriteria"]["toPincode"], "110002");
    assert_eq!(body["searchCriteria"]["estimatedRideDurationHours"], 1.0);
}

#[tokio::test]
async fn test_search_with_no_matches_keeps_criteria() {
    let app = create_test_app();
    register_vehicle(&app, "Pequeño", 300, 4).await;

    let uri = format!(
        "/api/vehicles/available?capacityRequired=1000&fromPincode=110001&toPincode=110002&startTime={}",
        rfc3339(future_start())
    );
    let (status, body) = send_get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["availableVehicles"].as_array().unwrap().len(), 0);
    assert_eq!(body["searchCriteria"]["capacityRequired"], 1000);
}

#[tokio::test]
async fn test_search_validation_errors() {
    let app = create_test_app();
    register_vehicle(&app, "Alpha", 1000, 4).await;

    // pincode malformado
    let uri = format!(
        "/api/vehicles/available?capacityRequired=500&fromPincode=1100&toPincode=110002&startTime={}",
        rfc3339(future_start())
    );
    let (status, body) = send_get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["fromPincode"].is_array());

    // capacidad no positiva
    let uri = format!(
        "/api/vehicles/available?capacityRequired=0&fromPincode=110001&toPincode=110002&startTime={}",
        rfc3339(future_start())
    );
    let (status, body) = send_get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["capacityRequired"].is_array());

    // inicio en el pasado
    let uri = format!(
        "/api/vehicles/available?capacityRequired=500&fromPincode=110001&toPincode=110002&startTime={}",
        rfc3339(Utc::now() - Duration::hours(1))
    );
    let (status, body) = send_get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["startTime"].is_array());
}

#[tokio::test]
async fn test_create_booking_and_fetch_it() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "Alpha", 1000, 4).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();
    let start = future_start();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/bookings",
        json!({
            "vehicleId": vehicle_id,
            "customerId": "customer-42",
            "fromPincode": "110001",
            "toPincode": "110002",
            "startTime": rfc3339(start),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vehículo reservado exitosamente");
    assert_eq!(body["booking"]["vehicleId"], vehicle_id);
    assert_eq!(body["booking"]["customerId"], "customer-42");
    assert_eq!(body["booking"]["status"], "confirmed");
    assert_eq!(body["booking"]["estimatedRideDurationHours"], 1.0);

    // la ventana la calcula el servidor a partir de la ruta
    let end: DateTime<Utc> = body["booking"]["endTime"].as_str().unwrap().parse().unwrap();
    assert_eq!(end, start + Duration::hours(1));

    let booking_id = body["booking"]["id"].as_str().unwrap();
    let (status, body) = send_get(&app, &format!("/api/bookings/{}", booking_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["id"], booking_id);
}

#[tokio::test]
async fn test_create_booking_unknown_vehicle() {
    let app = create_test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/bookings",
        json!({
            "vehicleId": "00000000-0000-0000-0000-000000000000",
            "customerId": "customer-42",
            "fromPincode": "110001",
            "toPincode": "110002",
            "startTime": rfc3339(future_start()),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "VEHICLE_NOT_FOUND");
}

#[tokio::test]
async fn test_conflicting_booking_returns_409_with_details() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "Alpha", 1000, 4).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();
    let start = future_start();

    let payload = json!({
        "vehicleId": vehicle_id,
        "customerId": "customer-1",
        "fromPincode": "110001",
        "toPincode": "110005",
        "startTime": rfc3339(start),
    });

    let (status, _) = send_json(&app, "POST", "/api/bookings", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, "POST", "/api/bookings", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "VEHICLE_UNAVAILABLE");
    assert_eq!(body["details"]["vehicleId"], vehicle_id);
    assert!(body["details"]["conflictingWindow"]["startTime"].is_string());
    assert!(body["details"]["conflictingWindow"]["endTime"].is_string());
}

#[tokio::test]
async fn test_booked_vehicle_disappears_from_search() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "Alpha", 1000, 4).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();
    let start = future_start();

    send_json(
        &app,
        "POST",
        "/api/bookings",
        json!({
            "vehicleId": vehicle_id,
            "customerId": "customer-1",
            "fromPincode": "110001",
            "toPincode": "110005",
            "startTime": rfc3339(start),
        }),
    )
    .await;

    // ventana solapada: el vehículo ya no aparece
    let uri = format!(
        "/api/vehicles/available?capacityRequired=500&fromPincode=110001&toPincode=110005&startTime={}",
        rfc3339(start + Duration::hours(1))
    );
    let (status, body) = send_get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["availableVehicles"].as_array().unwrap().len(), 0);

    // ventana que solo toca el final: vuelve a aparecer
    let uri = format!(
        "/api/vehicles/available?capacityRequired=500&fromPincode=110001&toPincode=110005&startTime={}",
        rfc3339(start + Duration::hours(4))
    );
    let (status, body) = send_get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["availableVehicles"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_booking_status_lifecycle_over_http() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "Alpha", 1000, 4).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/bookings",
        json!({
            "vehicleId": vehicle_id,
            "customerId": "customer-1",
            "fromPincode": "110001",
            "toPincode": "110002",
            "startTime": rfc3339(future_start()),
        }),
    )
    .await;
    let booking_id = body["booking"]["id"].as_str().unwrap().to_string();

    // confirmed no puede saltar a completed
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/bookings/{}/status", booking_id),
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATUS_TRANSITION");

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/bookings/{}/status", booking_id),
        json!({ "status": "in-progress" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["status"], "in-progress");

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/bookings/{}/status", booking_id),
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["status"], "completed");

    // un estado desconocido ni siquiera deserializa
    let (status, _) = send_json(
        &app,
        "PATCH",
        &format!("/api/bookings/{}/status", booking_id),
        json!({ "status": "teleported" }),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_update_status_unknown_booking() {
    let app = create_test_app();
    let (status, body) = send_json(
        &app,
        "PATCH",
        "/api/bookings/00000000-0000-0000-0000-000000000000/status",
        json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BOOKING_NOT_FOUND");
}

#[tokio::test]
async fn test_list_bookings_with_filters() {
    let app = create_test_app();
    let alpha = register_vehicle(&app, "Alpha", 1000, 4).await;
    let beta = register_vehicle(&app, "Beta", 1000, 4).await;
    let alpha_id = alpha["id"].as_str().unwrap();
    let beta_id = beta["id"].as_str().unwrap();
    let start = future_start();

    for (vehicle_id, customer) in [(alpha_id, "customer-1"), (beta_id, "customer-2")] {
        let (status, _) = send_json(
            &app,
            "POST",
            "/api/bookings",
            json!({
                "vehicleId": vehicle_id,
                "customerId": customer,
                "fromPincode": "110001",
                "toPincode": "110002",
                "startTime": rfc3339(start),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send_get(&app, "/api/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);

    let (_, body) = send_get(&app, &format!("/api/bookings?vehicleId={}", alpha_id)).await;
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["vehicleId"], alpha_id);

    let (_, body) = send_get(&app, "/api/bookings?customerId=customer-2").await;
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["customerId"], "customer-2");

    let (_, body) = send_get(&app, "/api/bookings?status=confirmed").await;
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);
    let (_, body) = send_get(&app, "/api/bookings?status=cancelled").await;
    assert_eq!(body["bookings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboard_empty_state() {
    let app = create_test_app();
    let (status, body) = send_get(&app, "/api/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalVehicles"], 0);
    assert_eq!(body["availableVehicles"], 0);
    assert_eq!(body["activeBookings"], 0);
    assert_eq!(body["completedBookings"], 0);
    assert_eq!(body["recentBookings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboard_counts_future_confirmed_as_available_now() {
    let app = create_test_app();
    let vehicle = register_vehicle(&app, "Alpha", 1000, 4).await;
    let vehicle_id = vehicle["id"].as_str().unwrap();

    // reserva futura: activa para el contador, pero el vehículo está libre ahora
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/bookings",
        json!({
            "vehicleId": vehicle_id,
            "customerId": "customer-1",
            "fromPincode": "110001",
            "toPincode": "110002",
            "startTime": rfc3339(future_start()),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_get(&app, "/api/dashboard/stats").await;
    assert_eq!(body["totalVehicles"], 1);
    assert_eq!(body["availableVehicles"], 1);
    assert_eq!(body["activeBookings"], 1);
    assert_eq!(body["recentBookings"].as_array().unwrap().len(), 1);
}
