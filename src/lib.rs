pub mod clipboard;
pub mod constants;
pub mod error;
pub mod http;
pub mod logging;
pub mod output;
pub mod processor;
pub mod types;
pub mod utils;

pub use error::{ArgumentError, ClipboardError, ExtractionError, FetchError, GhtError};
pub use processor::{run, set_stderr_color};
pub use types::{Cli, parse_args};
