use std::process::ExitCode;

use mwtm_core::{list_monitors, list_windows};
use mwtm_x11::X11Desktop;

/// Prints the monitor and window snapshot that requests are matched against.
///
/// Names and titles are shown normalized, exactly as matching sees them.
pub fn execute(display: Option<&str>) -> ExitCode {
    let desktop = match X11Desktop::connect(display) {
        Ok(desktop) => desktop,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let monitors = match list_monitors(&desktop) {
        Ok(monitors) => monitors,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let windows = match list_windows(&desktop) {
        Ok(windows) => windows,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Monitors:");
    for m in &monitors {
        let primary = if m.primary { "  primary" } else { "" };
        println!("  {:<12} {}{primary}", m.name, m.geometry);
    }

    println!("\nWindows:");
    for w in &windows {
        println!("  0x{:08x}  {}", w.handle, w.title);
    }

    println!(
        "\n{} monitors, {} windows found",
        monitors.len(),
        windows.len()
    );
    ExitCode::SUCCESS
}
