pub mod html;
pub mod url;

pub use html::{extract_title, normalize_whitespace};
pub use url::{normalize_url_scheme, resolve_url};
