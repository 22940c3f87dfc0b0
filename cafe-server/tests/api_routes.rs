//! HTTP adapter tests through the router, without a socket

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use cafe_server::db::{DbService, seed};
use cafe_server::{Config, ServerState, build_app};

struct TestApp {
    app: Router,
    _work_dir: tempfile::TempDir,
    receipts_dir: std::path::PathBuf,
}

async fn test_app() -> TestApp {
    test_app_with_printer(None).await
}

async fn test_app_with_printer(printer_addr: Option<String>) -> TestApp {
    let work_dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    config.table_count = 15;
    config.receipt_width = 32;
    config.receipt_printer_addr = printer_addr;

    let db = DbService::open_in_memory().await.unwrap();
    seed::seed_catalog_if_empty(&db.pool).await.unwrap();
    let receipts_dir = config.receipts_dir();

    TestApp {
        app: build_app(ServerState::new(config, db.pool)),
        _work_dir: work_dir,
        receipts_dir,
    }
}

impl TestApp {
    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}

#[tokio::test]
async fn health_reports_database_ok() {
    let app = test_app().await;
    let (status, body) = app.call(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["printer"], "not_configured");
}

#[tokio::test]
async fn products_and_categories() {
    let app = test_app().await;

    let (status, body) = app.call(Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);

    let (status, body) = app
        .call(
            Method::POST,
            "/api/products",
            Some(json!({"name": "Limonata", "price": 45.0, "category": "COLD_DRINK"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Limonata");

    let (_, body) = app
        .call(Method::GET, "/api/products?category=COLD_DRINK", None)
        .await;
    let cold = body["data"].as_array().unwrap();
    assert_eq!(cold.len(), 1);
    assert_eq!(cold[0]["category"], "COLD_DRINK");

    let (status, body) = app
        .call(
            Method::POST,
            "/api/products",
            Some(json!({"name": "Free", "price": 0.0, "category": "COFFEE"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (_, body) = app.call(Method::GET, "/api/categories", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][0]["category"], "COFFEE");
}

#[tokio::test]
async fn order_flow_over_http() {
    let app = test_app().await;

    // product 1 is the seeded Espresso @ 60
    let (status, body) = app
        .call(
            Method::POST,
            "/api/tables/3/lines",
            Some(json!({"product_id": 1, "note": "sade"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let line_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["quantity"], 1);

    app.call(Method::POST, "/api/tables/3/lines", Some(json!({"product_id": 1})))
        .await;

    let (_, body) = app.call(Method::GET, "/api/tables/3/lines", None).await;
    assert_eq!(body["data"]["total"], 120.0);
    assert_eq!(body["data"]["lines"][0]["note"], "sade");

    let (_, body) = app.call(Method::GET, "/api/tables/occupied", None).await;
    assert_eq!(body["data"], json!([3]));

    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/lines/{line_id}/payment"),
            Some(json!({"amount": 50.0})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["line"]["quantity"], 1);

    let (_, body) = app
        .call(
            Method::PUT,
            &format!("/api/lines/{line_id}/note"),
            Some(json!({"note": "double shot"})),
        )
        .await;
    assert_eq!(body["data"]["line"]["note"], "double shot");

    let (_, body) = app
        .call(Method::POST, &format!("/api/lines/{line_id}/decrease"), None)
        .await;
    assert!(body["data"]["line"].is_null());

    let (_, body) = app.call(Method::GET, "/api/tables", None).await;
    let tables = body["data"].as_array().unwrap();
    assert_eq!(tables.len(), 15);
    assert!(tables.iter().all(|t| t["occupied"] == false));
}

#[tokio::test]
async fn error_responses_use_envelope() {
    let app = test_app().await;

    let (status, body) = app
        .call(Method::POST, "/api/tables/16/lines", Some(json!({"product_id": 1})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7001);
    assert_eq!(body["details"]["max"], 15);

    let (status, body) = app
        .call(Method::POST, "/api/tables/2/lines", Some(json!({"product_id": 999})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let (status, body) = app.call(Method::POST, "/api/lines/42/increase", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4006);

    app.call(Method::POST, "/api/tables/2/lines", Some(json!({"product_id": 1})))
        .await;
    let (_, body) = app.call(Method::GET, "/api/tables/2/lines", None).await;
    let line_id = body["data"]["lines"][0]["id"].as_i64().unwrap();
    let (status, body) = app
        .call(
            Method::POST,
            &format!("/api/lines/{line_id}/payment"),
            Some(json!({"amount": 75.0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5005);
}

#[tokio::test]
async fn close_and_move_tables() {
    let app = test_app().await;
    app.call(Method::POST, "/api/tables/1/lines", Some(json!({"product_id": 1})))
        .await;
    app.call(Method::POST, "/api/tables/1/lines", Some(json!({"product_id": 2})))
        .await;

    let (status, body) = app
        .call(Method::POST, "/api/tables/1/move", Some(json!({"to_table_no": 5})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["moved_lines"], 2);

    let (_, body) = app.call(Method::GET, "/api/tables/occupied", None).await;
    assert_eq!(body["data"], json!([5]));

    let (_, body) = app.call(Method::POST, "/api/tables/5/close", None).await;
    assert_eq!(body["data"]["removed_lines"], 2);
    let (status, body) = app.call(Method::POST, "/api/tables/5/close", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed_lines"], 0);
}

#[tokio::test]
async fn receipt_is_written_to_work_dir() {
    let app = test_app().await;

    let (status, body) = app.call(Method::POST, "/api/tables/4/receipt", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7003);

    app.call(Method::POST, "/api/tables/4/lines", Some(json!({"product_id": 6})))
        .await;
    let (status, body) = app.call(Method::POST, "/api/tables/4/receipt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["printed"], false);
    assert_eq!(body["data"]["receipt"]["total"], 55.0);

    let file = std::path::PathBuf::from(body["data"]["file"].as_str().unwrap());
    assert!(file.starts_with(&app.receipts_dir));
    let name = file.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("receipt_4_") && name.ends_with(".txt"), "{name}");

    let text = std::fs::read_to_string(&file).unwrap();
    assert!(text.contains("Masa 4 Adisyon"));
    assert!(text.contains("Türk Kahvesi x1 = 55.00 ₺"));
    assert!(text.contains("Toplam: 55.00 ₺"));
}

#[tokio::test]
async fn receipt_is_sent_to_network_printer() {
    use tokio::io::AsyncReadExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        socket.read_to_end(&mut buf).await.unwrap();
        buf
    });

    let app = test_app_with_printer(Some(addr.to_string())).await;
    app.call(Method::POST, "/api/tables/8/lines", Some(json!({"product_id": 2})))
        .await;
    let (status, body) = app.call(Method::POST, "/api/tables/8/receipt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["printed"], true);

    let bytes = received.await.unwrap();
    // Windows-1254 code page selected up front
    assert_eq!(&bytes[..3], &[0x1B, 0x74, 48]);
    assert!(String::from_utf8_lossy(&bytes).contains("70.00 TL"));
}
