use crate::constants::{DEFAULT_SCHEME, SUPPORTED_SCHEMES};
use crate::error::ArgumentError;

/// Pick the single URL source from the `-u/--url` flag or the positional list.
pub fn resolve_url<'a>(
    positionals: &'a [String],
    url_flag: Option<&'a str>,
) -> Result<&'a str, ArgumentError> {
    match (url_flag, positionals) {
        (Some(_), [_, ..]) => Err(ArgumentError::Conflict),
        (Some(url), []) if url.trim().is_empty() => Err(ArgumentError::EmptyUrl),
        (Some(url), []) => Ok(url),
        (None, [url]) if url.trim().is_empty() => Err(ArgumentError::EmptyUrl),
        (None, [url]) => Ok(url.as_str()),
        (None, []) => Err(ArgumentError::MissingUrl),
        (None, _) => Err(ArgumentError::TooManyUrls),
    }
}

/// Normalize URL by adding the default scheme if missing
pub fn normalize_url_scheme(url_str: &str) -> String {
    if SUPPORTED_SCHEMES
        .iter()
        .any(|scheme| url_str.starts_with(scheme))
    {
        return url_str.to_string();
    }

    format!("{}{}", DEFAULT_SCHEME, url_str)
}
