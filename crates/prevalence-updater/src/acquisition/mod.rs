//! Page acquisition: fetch the CDC page and pull the ADDM trend out of it.

pub mod http_client;
pub mod page_text;
pub mod trend;
