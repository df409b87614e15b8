use std::{fs::File, net::SocketAddr};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use gatelog::{config::AppConfig, db::init_pool, routes::create_router, state::AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    state: AppState,
    _root: TempDir,
}

async fn test_app() -> TestApp {
    let root = TempDir::new().expect("temp dir");

    let db_path = root.path().join("http.sqlite");
    File::create(&db_path).expect("db file");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy());

    let config = AppConfig {
        database_url: database_url.clone(),
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
    };

    let db = init_pool(&config.database_url).await.expect("pool");
    sqlx::migrate!("./migrations").run(&db).await.expect("migrations");

    let state = AppState::new(config, db);
    TestApp {
        router: create_router(state.clone()),
        state,
        _root: root,
    }
}

fn json_post(uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn html_body(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn empty_body_on_single_row_save_is_rejected() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(json_post("/save_reports_row", Body::empty()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], "No data received");

    let stored = app.state.reports.list_all().await.expect("list");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn single_row_save_stores_literal_values() {
    let app = test_app().await;

    let payload = json!({
        "city": "Pune",
        "sr_no": 3,
        "vrn": "MH12AB1234",
        "model": "Sedan",
        "entry_date": "2024-01-05",
        "in_time": "09:00",
        "out_date": "",
        "out_time": "",
        "remarks": ""
    });
    let response = app
        .router
        .clone()
        .oneshot(json_post("/save_reports_row", Body::from(payload.to_string())))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "Row saved");

    let stored = app.state.reports.list_all().await.expect("list");
    assert_eq!(stored.len(), 1);
    let row = &stored[0];
    assert_eq!(row.city, "Pune");
    assert_eq!(row.sr_no, Some(3));
    assert_eq!(row.vrn.as_deref(), Some("MH12AB1234"));
    assert_eq!(row.model.as_deref(), Some("Sedan"));
    assert_eq!(row.entry_date.as_deref(), Some("2024-01-05"));
    assert_eq!(row.in_time.as_deref(), Some("09:00"));
    assert_eq!(row.out_date.as_deref(), Some(""));
    assert_eq!(row.out_time.as_deref(), Some(""));
    assert_eq!(row.remarks.as_deref(), Some(""));
}

#[tokio::test]
async fn bulk_save_acknowledges_and_persists_the_batch() {
    let app = test_app().await;

    let payload = json!([
        {
            "city": "Pune",
            "sr_no": "1",
            "vrn": "MH12AB1234",
            "model": "Sedan",
            "entry_date": "2024-01-05",
            "in_time": "09:00",
            "out_date": "2024-01-05",
            "out_time": "17:30",
            "remarks": "Work Done"
        },
        {
            "city": "Mumbai",
            "sr_no": "",
            "vrn": "MH01CD5678",
            "model": "Truck",
            "entry_date": "2024-01-05",
            "in_time": "10:15",
            "out_date": "",
            "out_time": "",
            "remarks": "Work In Progress"
        }
    ]);
    let response = app
        .router
        .clone()
        .oneshot(json_post("/save_reports", Body::from(payload.to_string())))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "success");

    let stored = app.state.reports.list_all().await.expect("list");
    assert_eq!(stored.len(), 2);
    let empty_sr = stored.iter().find(|r| r.city == "Mumbai").expect("row");
    assert_eq!(empty_sr.sr_no, None);
}

#[tokio::test]
async fn view_logs_renders_stored_entries() {
    let app = test_app().await;

    app.router
        .clone()
        .oneshot(json_post(
            "/save_reports_row",
            Body::from(
                json!({
                    "city": "Pune",
                    "sr_no": 1,
                    "vrn": "MH12AB1234",
                    "model": "Sedan",
                    "entry_date": "2024-01-05",
                    "in_time": "09:00"
                })
                .to_string(),
            ),
        ))
        .await
        .expect("save response");

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/view_logs")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = html_body(response).await;
    assert!(body.contains("All vehicle logs"));
    assert!(body.contains("MH12AB1234"));
    assert!(body.contains("Pune"));
}

#[tokio::test]
async fn view_by_date_without_matches_renders_empty_listing() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/view_by_date/2030-01-01")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = html_body(response).await;
    assert!(body.contains("Vehicle logs for 2030-01-01"));
    assert!(body.contains("No entries recorded."));
}
