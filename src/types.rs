use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

use crate::error::ArgumentError;

/// Get HTML Title
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "ght",
    about = "Get HTML Title",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Show this help message.
    #[arg(short, long)]
    pub help: bool,

    /// Print version information.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// URL to fetch.
    #[arg(short, long, value_name = "URL", allow_hyphen_values = true)]
    pub url: Option<String>,

    /// Print the title as a Markdown link.
    #[arg(short, long)]
    pub markdown: bool,

    /// Copy the output to the clipboard.
    #[arg(short, long)]
    pub copy: bool,

    /// URL to fetch (alternative to -u/--url).
    #[arg(value_name = "URL")]
    pub positionals: Vec<String>,
}

/// Parse raw CLI tokens (without the program name).
pub fn parse_args<I, T>(args: I) -> Result<Cli, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from("ght")).chain(expand_short_clusters(args)?);
    Cli::try_parse_from(argv).map_err(|err| match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::NoEquals => {
            ArgumentError::MissingValue("-u/--url".to_string())
        }
        ErrorKind::UnknownArgument => ArgumentError::UnknownOption(offending_token(&err)),
        _ => ArgumentError::Invalid(first_line(&err.to_string())),
    })
}

/// Split short clusters like `-mc` into single flags and bind every URL flag
/// to its value as `--url=<value>`.
///
/// Each `u` in a cluster consumes the next token, so `-um example.com` is
/// `-m --url=example.com`. A bare `--` is rejected.
fn expand_short_clusters<I, T>(args: I) -> Result<Vec<OsString>, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = args.into_iter().map(Into::into);
    let mut expanded = Vec::new();

    while let Some(arg) = tokens.next() {
        let text = match arg.to_str() {
            Some(text) => text.to_owned(),
            None => {
                expanded.push(arg);
                continue;
            }
        };

        let letters = match text.as_str() {
            "--" => return Err(ArgumentError::UnknownOption(text.clone())),
            "-u" | "--url" => "u",
            _ if is_short_cluster(&text) => &text[1..],
            _ => {
                expanded.push(arg);
                continue;
            }
        };

        for letter in letters.chars() {
            if letter != 'u' {
                expanded.push(OsString::from(format!("-{}", letter)));
                continue;
            }
            let value = tokens
                .next()
                .ok_or_else(|| ArgumentError::MissingValue("-u/--url".to_string()))?;
            let mut bound = OsString::from("--url=");
            bound.push(&value);
            expanded.push(bound);
        }
    }

    Ok(expanded)
}

fn is_short_cluster(text: &str) -> bool {
    text.len() > 2
        && text.starts_with('-')
        && !text.starts_with("--")
        && text[1..].chars().all(|c| c.is_ascii_alphabetic())
}

/// Full help text, used both for `--help` and after usage errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

fn offending_token(err: &clap::Error) -> String {
    match err.get(clap::error::ContextKind::InvalidArg) {
        Some(clap::error::ContextValue::String(arg)) => arg.clone(),
        _ => first_line(&err.to_string()),
    }
}

fn first_line(msg: &str) -> String {
    let line = msg.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}
