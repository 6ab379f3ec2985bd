//! Application logging functionality
//!
//! Handles log file management and output redirection

use std::fs;
use std::path::PathBuf;

use crate::core::config::ConfigFile;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name for the log written on `date`
pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("quadpivot-{}.log", date.format("%Y-%m-%d"))
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(log_file_name(chrono::Utc::now().date_naive()))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Redirect stdout and stderr to today's file in ~/.config/quadpivot/logs/
///
/// Fails without touching anything if the config directory was never
/// created (see `--new-config`).
#[cfg(unix)]
pub fn setup_log_redirection() -> anyhow::Result<()> {
    use std::fs::OpenOptions;
    use std::os::unix::io::AsRawFd;

    let config_dir = ConfigFile::config_dir();
    if !config_dir.exists() {
        return Err(anyhow::anyhow!(
            "Config directory {:?} doesn't exist, run with --new-config first",
            config_dir
        ));
    }

    initialize_logs_directory()?;
    let log_file_path = current_log_file();

    // Same-day runs share one file
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let fd = log_file.as_raw_fd();
    // SAFETY: both descriptors are valid for the duration of the calls
    let redirected = unsafe {
        libc::dup2(fd, libc::STDOUT_FILENO) != -1 && libc::dup2(fd, libc::STDERR_FILENO) != -1
    };
    if !redirected {
        return Err(std::io::Error::last_os_error().into());
    }

    println!(
        "=== Quadpivot started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Logs redirected to: {:?}", log_file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_named_by_day() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(log_file_name(date), "quadpivot-2024-03-07.log");
        assert!(current_log_file().starts_with(logs_dir()));
    }
}
