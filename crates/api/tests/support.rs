#![allow(dead_code)]

use salonlite_domain::Config;
use salonlite_lib::AppContext;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "csrf-test-token";

/// Context wired against a fresh mock backend.
pub async fn setup_test_context() -> (AppContext, MockServer) {
    let server = MockServer::start().await;
    let ctx = AppContext::new_with_config(Config::with_base_url(server.uri()))
        .expect("context should build against the mock server");
    (ctx, server)
}

/// Accept any login and hand out [`TOKEN`].
pub async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/is_logged_in/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "X-CSRFToken": TOKEN })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

pub async fn signed_in_context() -> (AppContext, MockServer) {
    let (ctx, server) = setup_test_context().await;
    mount_session(&server).await;
    let form = salonlite_core::forms::LoginForm {
        username: "front".into(),
        password: "desk".into(),
    };
    salonlite_lib::sign_in(&ctx, &form).await.expect("sign in against mock");
    (ctx, server)
}

pub fn technician(id: i64, name: &str) -> Value {
    json!({ "TechID": id, "TechName": name })
}

pub fn customer(id: i64, first: &str, last: &str) -> Value {
    json!({
        "CustomerID": id,
        "CustomerFirstName": first,
        "CustomerLastName": last
    })
}

pub fn appointment(id: i64, date: &str, tech_id: i64, start: &str, duration: u32) -> Value {
    json!({
        "AppID": id,
        "AppDate": date,
        "AppStatus": "Open",
        "AppTotal": "35.00",
        "Customer": customer(1, "Mia", "Tran"),
        "Services": [{
            "ServiceName": "Gel Manicure",
            "ServiceCode": "GEL",
            "ServiceStartTime": start,
            "ServiceDuration": duration,
            "ServicePrice": "35.00",
            "TechID": tech_id
        }]
    })
}

pub fn saved_service(id: i64, code: &str, name: &str) -> Value {
    json!({
        "ServiceID": id,
        "ServiceCode": code,
        "ServiceName": name,
        "ServicePrice": 35.0,
        "ServiceDuration": 45
    })
}

pub fn schedule_entry(tech_id: i64, from: &str, to: &str, available: bool, created: &str) -> Value {
    json!({
        "TechID": tech_id,
        "From": from,
        "To": to,
        "Availability": available,
        "Created_At": created
    })
}
