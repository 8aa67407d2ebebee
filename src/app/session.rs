//! Terminal session bracketing
//!
//! Mouse capture and raw mode are torn down on every path out of the UI loop.

use std::io;

use color_eyre::{Report, Result};

/// Run `body` between `setup` and `teardown`, then always call `restore`
///
/// The loop's own error wins over a teardown error.
pub fn run_session<T>(
    setup: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    teardown: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce(),
) -> Result<T> {
    let result = setup().map_err(Report::from).and_then(|()| body());

    let torn_down = teardown();
    restore();

    let value = result?;
    torn_down?;
    Ok(value)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
