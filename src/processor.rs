use colored::*;
use std::ffi::OsString;
use std::io::Write;

use crate::clipboard::copy_to_clipboard;
use crate::constants::EXIT_SUCCESS;
use crate::error::GhtError;
use crate::http::{build_http_client, fetch_title};
use crate::output::format_output;
use crate::types::{parse_args, usage};
use crate::utils::resolve_url;

/// Run one invocation and return its process exit code.
///
/// The title line reaches `stdout` before the clipboard step, so a clipboard
/// failure never hides it.
pub async fn run<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    match execute(args, stdout).await {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_error(stderr, &err);
            err.exit_code()
        }
    }
}

async fn execute<I, T, O>(args: I, stdout: &mut O) -> Result<(), GhtError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
{
    let cli = parse_args(args)?;

    if cli.help {
        write!(stdout, "{}", usage())?;
        return Ok(());
    }
    if cli.version {
        writeln!(stdout, "ght {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let resolved = resolve_url(&cli.positionals, cli.url.as_deref())?;
    let client = build_http_client()?;
    let page = fetch_title(&client, resolved).await?;

    let output = format_output(&page.title, &page.url, cli.markdown);
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;

    if cli.copy {
        copy_to_clipboard(&output)?;
    }

    Ok(())
}

/// Colour the stderr prefixes only when stderr is a terminal.
pub fn set_stderr_color(enabled: bool) {
    colored::control::set_override(enabled);
}

fn report_error<E: Write>(stderr: &mut E, err: &GhtError) {
    // Nothing useful can be done if stderr itself is broken.
    let _ = match err {
        GhtError::Argument(e) => writeln!(stderr, "{}: {}", "error".red(), e)
            .and_then(|_| write!(stderr, "\n{}", usage())),
        GhtError::Clipboard(e) => {
            writeln!(stderr, "{}: clipboard copy failed: {}", "warning".yellow(), e)
        }
        other => writeln!(stderr, "{}: {}", "error".red(), other),
    };
}
