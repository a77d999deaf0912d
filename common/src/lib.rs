//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod discovery_const;
pub mod category;
pub mod filter_state;
pub mod remote_query;
pub mod dataset;
pub mod discovery_result;
