//! HTTP plumbing for the marketplace REST API.

pub mod marketplace_client;
pub mod marketplace_error;

#[cfg(test)]
pub(crate) mod fake_marketplace;
