mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn customer_token(app: &TestApp, email: &str) -> String {
    let response = app
        .post("/api/customers")
        .json(&json!({
            "name": "Jana",
            "surname": "Novakova",
            "city": "Zilina",
            "telephone": "0901234567",
            "birthdate": "02.01.1990",
            "email": email,
            "password": "tajne-heslo"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = app
        .post("/api/auth/login")
        .json(&json!({ "username": email, "password": "tajne-heslo" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    body["data"]["token"].as_str().unwrap().to_string()
}

fn vehicle_body(vin: &str, plate_no: &str) -> serde_json::Value {
    json!({
        "brand": "Skoda",
        "model": "Octavia",
        "registered_at": "14.05.2019",
        "vin": vin,
        "plate_no": plate_no,
        "fuel": "diesel",
        "mileage": 84000
    })
}

async fn add_vehicle(app: &TestApp, token: &str, vin: &str, plate_no: &str) -> reqwest::Response {
    app.post_authenticated("/api/vehicles", token)
        .json(&vehicle_body(vin, plate_no))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_add_vehicle_success() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;

    let response = add_vehicle(&app, &token, "TMBJJ7NE8K0123456", "ZA123AB").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["customer_id"], 1);
    assert_eq!(body["data"]["registered_at"], "2019-05-14");
    assert_eq!(body["data"]["plate_no"], "ZA123AB");
    assert_eq!(body["data"]["deleted"], false);
    assert!(body["data"]["color"].is_null());
}

#[tokio::test]
async fn test_add_vehicle_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/vehicles")
        .json(&vehicle_body("TMBJJ7NE8K0123456", "ZA123AB"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_vehicle_rejects_company() {
    let app = TestApp::spawn().await;
    app.post("/api/companies")
        .json(&json!({
            "company_name": "Autoservis s.r.o.",
            "ico": "12345678",
            "email": "info@autoservis.sk",
            "telephone": "0412345678",
            "address": "Hlavna 1, Zilina",
            "password": "firemne-heslo"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = app
        .post("/api/auth/login")
        .json(&json!({ "username": "12345678", "password": "firemne-heslo" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let company = body["data"]["token"].as_str().unwrap().to_string();

    let response = add_vehicle(&app, &company, "TMBJJ7NE8K0123456", "ZA123AB").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_add_vehicle_duplicates_conflict() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;
    add_vehicle(&app, &token, "TMBJJ7NE8K0123456", "ZA123AB").await;

    let response = add_vehicle(&app, &token, "TMBJJ7NE8K0999999", "ZA123AB").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = add_vehicle(&app, &token, "TMBJJ7NE8K0123456", "ZA999ZZ").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_add_vehicle_validation() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;

    let mut body = vehicle_body("TMBJJ7NE8K0123456", "ZA123AB");
    body["mileage"] = json!(-1);
    let response = app
        .post_authenticated("/api/vehicles", &token)
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut body = vehicle_body("TMBJJ7NE8K0123456", "ZA123AB");
    body["color"] = json!(" ");
    let response = app
        .post_authenticated("/api/vehicles", &token)
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_vehicle_by_id_and_vin() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;
    add_vehicle(&app, &token, "TMBJJ7NE8K0123456", "ZA123AB").await;

    let response = app
        .get_authenticated("/api/vehicles/1", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["vin"], "TMBJJ7NE8K0123456");

    let response = app
        .get_authenticated("/api/vehicles/vin/TMBJJ7NE8K0123456", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);

    let response = app
        .get_authenticated("/api/vehicles/vin/WVWZZZ1JZXW000001", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get_authenticated("/api/vehicles/auto", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_vehicle_by_owner() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;
    add_vehicle(&app, &token, "TMBJJ7NE8K0123456", "ZA123AB").await;

    let response = app
        .put_authenticated("/api/vehicles/1", &token)
        .json(&json!({ "color": "blue", "mileage": 91000, "brand": " " }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["color"], "blue");
    assert_eq!(body["data"]["mileage"], 91000);
    assert_eq!(body["data"]["brand"], "Skoda");
}

#[tokio::test]
async fn test_vehicle_changes_require_owner() {
    let app = TestApp::spawn().await;
    let owner = customer_token(&app, "jana@example.sk").await;
    let stranger = customer_token(&app, "peter@example.sk").await;
    add_vehicle(&app, &owner, "TMBJJ7NE8K0123456", "ZA123AB").await;

    let response = app
        .put_authenticated("/api/vehicles/1", &stranger)
        .json(&json!({ "color": "red" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .delete_authenticated("/api/vehicles/1", &stranger)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .get_authenticated("/api/vehicles/1", &owner)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["color"].is_null());
    assert_eq!(body["data"]["deleted"], false);
}

#[tokio::test]
async fn test_delete_vehicle_frees_plate() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;
    add_vehicle(&app, &token, "TMBJJ7NE8K0123456", "ZA123AB").await;

    let response = app
        .delete_authenticated("/api/vehicles/1", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["deleted"], true);

    let response = app
        .get_authenticated("/api/customers/1/vehicles", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"], json!([]));

    let response = add_vehicle(&app, &token, "TMBJJ7NE8K0999999", "ZA123AB").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .get_authenticated("/api/vehicles", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = app
        .get("/api/vehicles/count")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["count"], 2);
}

#[tokio::test]
async fn test_delete_unknown_vehicle() {
    let app = TestApp::spawn().await;
    let token = customer_token(&app, "jana@example.sk").await;

    let response = app
        .delete_authenticated("/api/vehicles/42", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
