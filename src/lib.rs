use std::{ffi::OsString, io::Write};

use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod error;

use error::GreeterError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate.
pub fn run() -> Result<()> {
    init_tracing();

    let stdout = std::io::stdout();
    run_with(std::env::args_os(), stdout.lock())
}

/// Echoes `argv` as a greeting line into `out`.
pub fn run_with<I, W>(argv: I, mut out: W) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let args = cli::collect_args(argv).context("failed to collect arguments")?;
    let line = commands::execute(&args).context("failed to execute command")?;

    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(GreeterError::Write)
        .context("failed to write greeting")?;
    Ok(())
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
