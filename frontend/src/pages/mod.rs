pub mod discovery_page;
