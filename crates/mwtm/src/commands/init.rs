use std::path::Path;
use std::process::ExitCode;

use mwtm_core::config;

/// Creates the default configuration file at `~/.config/mwtm/config.toml`.
///
/// An existing file is not overwritten.
pub fn execute() -> ExitCode {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        return ExitCode::FAILURE;
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        return ExitCode::FAILURE;
    }

    write_if_missing(&dir.join("config.toml"), &config::template::generate_config())
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &Path, content: &str) -> ExitCode {
    if path.exists() {
        eprintln!("Already exists: {}", path.display());
        return ExitCode::SUCCESS;
    }

    match std::fs::write(path, content) {
        Ok(()) => {
            eprintln!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}
