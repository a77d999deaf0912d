pub mod discovery_api;
