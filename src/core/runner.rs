//! Application runner logic
//!
//! Handles the special CLI flags, then builds and runs the editor

use crate::core::config::{CliArgs, ConfigFile};
use crate::logging;
use anyhow::Result;

/// Create and run the application with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        match ConfigFile::initialize_config_directory() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Failed to initialize config directory: {}", e);
                std::process::exit(1);
            }
        }
    }

    if cli_args.log_to_file {
        #[cfg(unix)]
        {
            if let Err(e) = logging::setup_log_redirection() {
                eprintln!("Failed to setup log redirection: {}", e);
            }
        }
        #[cfg(not(unix))]
        {
            eprintln!(
                "--log-to-file is only supported on Unix, not writing {:?}",
                logging::current_log_file()
            );
        }
    }

    let mut app = crate::core::app::create_app(cli_args)?;
    app.run();
    Ok(())
}
