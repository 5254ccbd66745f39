use std::io::{self, IsTerminal};
use std::process::ExitCode;

use ght::logging::init_tracing;
use ght::{run, set_stderr_color};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    set_stderr_color(io::stderr().is_terminal());

    let code = run(std::env::args_os().skip(1), &mut io::stdout(), &mut io::stderr()).await;

    ExitCode::from(code)
}
