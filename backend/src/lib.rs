//! Server-side access to the marketplace REST API.

pub mod api;
pub mod marketplace_utils;
pub mod server_extra;
