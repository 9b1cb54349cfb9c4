//! HTTP server assembly for Floodwatch.
//!
//! Composes the JSON intake API with permissive CORS, request tracing, and
//! static dashboard serving. The binary in `main.rs` wires in configuration
//! and the SQLite store.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{Method, header},
};
use floodwatch_core::store::RecordStore;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  services::ServeDir,
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FLOODWATCH_*` environment variables.
///
/// Every field has a default, so the server runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "defaults::host")]
  pub host:       String,
  #[serde(default = "defaults::port")]
  pub port:       u16,
  /// Path of the SQLite data file.
  #[serde(default = "defaults::db_path")]
  pub db_path:    PathBuf,
  /// Directory the dashboard assets are served from.
  #[serde(default = "defaults::static_dir")]
  pub static_dir: PathBuf,
}

mod defaults {
  use std::path::PathBuf;

  pub fn host() -> String { "0.0.0.0".to_string() }

  pub fn port() -> u16 { 5000 }

  pub fn db_path() -> PathBuf { PathBuf::from("floodwatch.db") }

  pub fn static_dir() -> PathBuf { PathBuf::from("static") }
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       defaults::host(),
      port:       defaults::port(),
      db_path:    defaults::db_path(),
      static_dir: defaults::static_dir(),
    }
  }
}

impl ServerConfig {
  /// The `"host:port"` bind address.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application router: the JSON API at the root, static
/// dashboard assets as the fallback, and permissive CORS over everything.
///
/// `ServeDir` answers `GET /` with `index.html` and `GET /<path>` with the
/// matching asset; unknown paths get its 404.
pub fn router<S>(store: Arc<S>, static_dir: &Path) -> Router
where
  S: RecordStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .merge(floodwatch_api::api_router(store))
    .fallback_service(ServeDir::new(static_dir))
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]),
    )
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use floodwatch_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../static");

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    router(Arc::new(store), Path::new(STATIC_DIR))
  }

  async fn get(app: Router, uri: &str) -> Response {
    let req = Request::builder()
      .method("GET")
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    app.oneshot(req).await.unwrap()
  }

  async fn submit(app: Router, body: Value) -> Response {
    let req = Request::builder()
      .method("POST")
      .uri("/submit")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    app.oneshot(req).await.unwrap()
  }

  async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
  }

  // ── Configuration ───────────────────────────────────────────────────────────

  #[test]
  fn config_defaults() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.address(), "0.0.0.0:5000");
  }

  #[test]
  fn config_deserialises_from_empty_input_using_defaults() {
    let cfg: ServerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.db_path, PathBuf::from("floodwatch.db"));
    assert_eq!(cfg.static_dir, PathBuf::from("static"));
  }

  // ── Submit ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn submit_returns_201_with_derived_risk() {
    let app = app().await;

    let resp = submit(
      app,
      json!({"village": "Nyagatare", "diarrhea": 12, "fever": 3, "rainfall": "High"}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["risk"], json!("High Risk"));
  }

  #[tokio::test]
  async fn submit_then_data_round_trips_newest_first() {
    let app = app().await;

    submit(
      app.clone(),
      json!({"village": "Gatsibo", "diarrhea": 7, "fever": 1, "rainfall": "Low"}),
    )
    .await;
    submit(
      app.clone(),
      json!({"village": "Kirehe", "diarrhea": 2, "fever": 0, "rainfall": "None"}),
    )
    .await;

    let resp = get(app, "/data").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let records = body_json(resp).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);

    // Most recent submission first, ids descending.
    assert_eq!(records[0]["village"], json!("Kirehe"));
    assert_eq!(records[1]["village"], json!("Gatsibo"));
    assert!(records[0]["id"].as_i64().unwrap() > records[1]["id"].as_i64().unwrap());

    // Risk derived server-side, date stamped at write time.
    assert_eq!(records[0]["risk"], json!("Safe"));
    assert_eq!(records[1]["risk"], json!("Medium Risk"));
    assert_eq!(records[0]["date"], json!(today()));
  }

  #[tokio::test]
  async fn submit_ignores_caller_supplied_risk_and_date() {
    let app = app().await;

    let resp = submit(
      app.clone(),
      json!({
        "village": "Nyagatare",
        "diarrhea": 14,
        "fever": 5,
        "rainfall": "High",
        "risk": "Safe",
        "date": "1999-01-01"
      }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["risk"], json!("High Risk"));

    let records = body_json(get(app, "/data").await).await;
    assert_eq!(records[0]["risk"], json!("High Risk"));
    assert_eq!(records[0]["date"], json!(today()));
  }

  #[tokio::test]
  async fn submit_with_non_numeric_count_fails_and_creates_nothing() {
    let app = app().await;

    let resp = submit(
      app.clone(),
      json!({"village": "Nyagatare", "diarrhea": "many", "fever": 0, "rainfall": "Low"}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].is_string());

    let records = body_json(get(app, "/data").await).await;
    assert!(records.as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn submit_with_missing_field_fails() {
    let app = app().await;

    let resp = submit(
      app,
      json!({"village": "Nyagatare", "diarrhea": 3, "fever": 0}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["success"], json!(false));
  }

  #[tokio::test]
  async fn submit_with_blank_village_fails_and_creates_nothing() {
    let app = app().await;

    let resp = submit(
      app.clone(),
      json!({"village": "  ", "diarrhea": 3, "fever": 0, "rainfall": "Low"}),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["success"], json!(false));

    let records = body_json(get(app, "/data").await).await;
    assert!(records.as_array().unwrap().is_empty());
  }

  // ── Preflight and CORS ──────────────────────────────────────────────────────

  #[tokio::test]
  async fn options_submit_returns_204_with_empty_body() {
    let app = app().await;

    let req = Request::builder()
      .method("OPTIONS")
      .uri("/submit")
      .body(Body::empty())
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    assert!(bytes.is_empty());
  }

  #[tokio::test]
  async fn responses_carry_permissive_cors_headers() {
    let app = app().await;

    let resp = get(app, "/data").await;
    let allow_origin = resp
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
      .unwrap();
    assert_eq!(allow_origin, "*");
  }

  // ── Data ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn data_on_empty_store_returns_empty_array() {
    let app = app().await;

    let resp = get(app, "/data").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
  }

  // ── Static assets ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn serves_the_landing_page_at_root() {
    let app = app().await;

    let resp = get(app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let ct = resp
      .headers()
      .get(header::CONTENT_TYPE)
      .unwrap()
      .to_str()
      .unwrap();
    assert!(ct.contains("html"), "Content-Type: {ct}");

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let body = std::str::from_utf8(&bytes).unwrap();
    assert!(body.contains("Floodwatch"), "body: {body}");
  }

  #[tokio::test]
  async fn serves_other_static_assets_by_path() {
    let app = app().await;

    let resp = get(app, "/app.js").await;
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
