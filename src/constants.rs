/// HTTP constants
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const MAX_BODY_BYTES: usize = 2 << 20;
pub const DEFAULT_SCHEME: &str = "https://";
pub const SUPPORTED_SCHEMES: [&str; 2] = ["http://", "https://"];
pub const USER_AGENT: &str = concat!("ght/", env!("CARGO_PKG_VERSION"));

/// HTML parsing constants
pub const TITLE_PATTERN: &str = r"(?is)<title[^>]*>(.*?)</title>";

/// Clipboard helpers named in the failure message
pub const CLIPBOARD_HINT: &str = "pbcopy/xclip/xsel/wl-copy/clip";

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
