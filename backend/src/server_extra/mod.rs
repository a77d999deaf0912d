//! Plain axum routes served next to the web app.

pub mod datasets_json;
pub mod health;
