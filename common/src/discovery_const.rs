//! Constants shared by the discovery engine, the backend and the web client.

/// Page size used when the filters are first created or cleared.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Page size hint sent to the categories endpoint; the list is loaded once.
pub const CATEGORY_PAGE_SIZE_HINT: u32 = 100;

/// Display value for missing provider, category and descriptive fields.
pub const UNKNOWN_LABEL: &str = "Unknown";
