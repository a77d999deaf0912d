pub mod discovery_context;
pub mod display_context;
