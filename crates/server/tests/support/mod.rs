#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use serde_json::{json, Value};
use tower::Service;

/// Router over a private in-memory database with migrations applied.
pub async fn build_app() -> anyhow::Result<Router> {
    let cfg = AppConfig { database: DatabaseConfig::from_url("sqlite::memory:"), ..AppConfig::default() };
    Ok(server::startup::build_app(&cfg).await?)
}

/// Send one request; the body is parsed as JSON when there is one.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, value))
}

pub fn barca() -> Value {
    json!({"name": "FC Barcelona", "shortName": "BAR", "foundingDate": "1899-11-29", "totalTrophies": 100})
}

pub fn real_madrid() -> Value {
    json!({"name": "Real Madrid", "shortName": "RM", "foundingDate": "1902-03-06", "totalTrophies": 99})
}

pub fn messi() -> Value {
    json!({
        "firstName": "Lionel",
        "lastName": "Messi",
        "birthDate": "1987-06-24",
        "position": "MIDFIELDER",
        "club": barca()
    })
}

pub fn ronaldo() -> Value {
    json!({
        "firstName": "Cristiano",
        "lastName": "Ronaldo",
        "birthDate": "1985-02-05",
        "position": "STRIKER",
        "club": real_madrid()
    })
}
