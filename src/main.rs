//! A small editor for dragging, scaling and rotating quads about a movable
//! anchor, built with Bevy and kurbo.

use std::process::ExitCode;

use quadpivot::core::{run_app, CliArgs};

#[cfg(not(target_arch = "wasm32"))]
fn cli_args() -> CliArgs {
    use clap::Parser;
    CliArgs::parse()
}

/// The browser has no command line
#[cfg(target_arch = "wasm32")]
fn cli_args() -> CliArgs {
    console_error_panic_hook::set_once();
    CliArgs::default_for_web()
}

/// Print the error with its whole context chain
fn report(error: &anyhow::Error) {
    let message = format!("quadpivot failed to start: {error:#}");
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}\nRun with --help for usage.");
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
}

fn main() -> ExitCode {
    match run_app(cli_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}
