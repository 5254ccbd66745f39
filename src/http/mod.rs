pub mod client;
pub mod fetch;

pub use client::build_http_client;
pub use fetch::{PageTitle, fetch_title, read_capped_body};
